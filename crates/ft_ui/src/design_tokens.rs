//! Adapted from https://github.com/rerun-io/rerun/blob/main/crates/re_ui/src/design_tokens.rs
use egui::Color32;

/// The look and feel of the UI.
///
/// Not everything is covered by this.
/// A lot of other design tokens are put straight into the [`egui::Style`]
#[derive(Clone, Copy, Debug)]
pub struct DesignTokens {
    pub top_bar_color: egui::Color32,
    pub bottom_bar_color: egui::Color32,
    pub bottom_bar_stroke: egui::Stroke,
    pub bottom_bar_rounding: egui::Rounding,
    pub preview_color: egui::Color32,
}

impl DesignTokens {
    /// Create [`DesignTokens`] and apply style to the given egui context.
    pub fn load_and_apply(ctx: &egui::Context) -> Self {
        apply_design_tokens(ctx)
    }
}

fn apply_design_tokens(ctx: &egui::Context) -> DesignTokens {
    let mut egui_style = egui::Style {
        visuals: egui::Visuals::dark(),
        ..Default::default()
    };

    let font_size = 13.0;
    for text_style in [egui::TextStyle::Body, egui::TextStyle::Button] {
        if let Some(font_id) = egui_style.text_styles.get_mut(&text_style) {
            font_id.size = font_size;
        }
    }

    let selection_color = Color32::from_rgb(0, 61, 161);
    let panel_bg_color = Color32::from_rgb(13, 16, 17);
    let floating_color = Color32::from_gray(38);

    // Used as the background of text edits, scroll bars and others things
    // that needs to look different from other interactive stuff.
    egui_style.visuals.extreme_bg_color = egui::Color32::BLACK;

    egui_style.visuals.widgets.noninteractive.weak_bg_fill = panel_bg_color;
    egui_style.visuals.widgets.noninteractive.bg_fill = panel_bg_color;

    egui_style.visuals.button_frame = true;
    egui_style.visuals.widgets.inactive.bg_fill = Color32::from_gray(40);

    {
        // Background colors for buttons and sliders when hovered or clicked:
        let hovered_color = Color32::from_gray(64);
        egui_style.visuals.widgets.hovered.weak_bg_fill = hovered_color;
        egui_style.visuals.widgets.hovered.bg_fill = hovered_color;
        egui_style.visuals.widgets.active.weak_bg_fill = hovered_color;
        egui_style.visuals.widgets.active.bg_fill = hovered_color;
    }

    egui_style.visuals.selection.bg_fill = selection_color;

    egui_style.visuals.widgets.noninteractive.bg_stroke.color = Color32::from_gray(30); // separator lines, panel lines, etc

    let subudued = Color32::from_rgb(125, 140, 146);
    let default = Color32::from_rgb(202, 216, 222);
    let strong = Color32::from_rgb(255, 255, 255);

    egui_style.visuals.widgets.noninteractive.fg_stroke.color = subudued; // non-interactive text
    egui_style.visuals.widgets.inactive.fg_stroke.color = default; // button text
    egui_style.visuals.widgets.active.fg_stroke.color = strong; // strong text and active button text

    egui_style.visuals.popup_shadow = egui::epaint::Shadow::NONE;
    egui_style.visuals.window_shadow = egui::epaint::Shadow::NONE;

    egui_style.visuals.window_fill = floating_color; // tooltips and menus
    egui_style.visuals.window_stroke = egui::Stroke::NONE;
    egui_style.visuals.panel_fill = panel_bg_color;

    egui_style.visuals.window_rounding = super::FtUi::window_rounding().into();
    egui_style.visuals.menu_rounding = super::FtUi::window_rounding().into();
    let small_rounding = super::FtUi::small_rounding().into();
    egui_style.visuals.widgets.noninteractive.rounding = small_rounding;
    egui_style.visuals.widgets.inactive.rounding = small_rounding;
    egui_style.visuals.widgets.hovered.rounding = small_rounding;
    egui_style.visuals.widgets.active.rounding = small_rounding;

    egui_style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    egui_style.spacing.menu_margin = super::FtUi::view_padding().into();
    egui_style.spacing.slider_width = 140.0;

    egui_style.spacing.scroll.bar_inner_margin = 2.0;
    egui_style.spacing.scroll.bar_width = 6.0;
    egui_style.spacing.scroll.bar_outer_margin = 2.0;

    ctx.set_style(egui_style);

    DesignTokens {
        top_bar_color: Color32::from_gray(20),
        bottom_bar_color: Color32::from_rgb(20, 24, 25),
        bottom_bar_stroke: egui::Stroke::new(1.0, egui::Color32::from_gray(47)),
        bottom_bar_rounding: egui::Rounding {
            nw: super::FtUi::normal_rounding(),
            ne: super::FtUi::normal_rounding(),
            sw: 0.0,
            se: 0.0,
        }, // should be top only
        preview_color: Color32::from_rgb(24, 28, 30),
    }
}

// ----------------------------------------------------------------------------

#[test]
fn test_design_tokens() {
    let ctx = egui::Context::default();
    apply_design_tokens(&ctx);

    // Make sure it works:
    let _ = ctx.run(Default::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(super::FadingLabel::new("Hello Test!").max_lines(1));
        });
    });
}
