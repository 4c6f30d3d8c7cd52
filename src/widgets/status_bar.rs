use crate::app::LayoutStats;
use ft_ui::FtUi;

pub fn status_bar_ui(ctx: &egui::Context, ft_ui: &FtUi, stats: Option<LayoutStats>) {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(ft_ui.bottom_panel_frame())
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                let weak = ui.visuals().weak_text_color();
                match stats {
                    Some(LayoutStats { lines, overflow }) => {
                        ui.label(format!("Lines: {lines}"));
                        if overflow {
                            ui.colored_label(ui.visuals().warn_fg_color, "Overflow: faded");
                        } else {
                            ui.colored_label(weak, "Fits");
                        }
                    }
                    None => {
                        ui.colored_label(weak, "No layout");
                    }
                }
            });
        });
}
