use crate::widgets::{preview_ui, settings_panel_ui, status_bar_ui};
use ft_core::{tracing, Setting};
use ft_ui::{FtUi, SIDE_PANEL_WIDTH};

/// What the last frame's fading label laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutStats {
    pub lines: usize,
    pub overflow: bool,
}

pub struct App {
    ft_ui: FtUi,
    setting: Setting,
    stats: Option<LayoutStats>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            ft_ui: FtUi::load_and_apply(&cc.egui_ctx),
            setting: Setting::load(),
            stats: None,
        }
    }
}

impl eframe::App for App {
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        if let Err(err) = self.setting.store() {
            tracing::warn!("failed to save settings: {err}");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar")
            .frame(self.ft_ui.top_panel_frame())
            .exact_height(FtUi::top_bar_height())
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.strong("FadeText");
                    ui.label("ellipsis vs. fade-out overflow");
                });
            });

        status_bar_ui(ctx, &self.ft_ui, self.stats);

        egui::SidePanel::left("settings_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| settings_panel_ui(ui, &mut self.setting));

        egui::CentralPanel::default().show(ctx, |ui| {
            self.stats = preview_ui(ui, &self.ft_ui, &self.setting);
        });
    }
}
