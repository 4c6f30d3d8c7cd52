mod design_tokens;
mod fading_label;

use design_tokens::DesignTokens;
use eframe::epaint::text::{LayoutJob, TextWrapping};

pub use fading_label::{FadingLabel, FadingLabelOutput};

pub const SIDE_PANEL_WIDTH: f32 = 260.0;

#[derive(Clone, Debug)]
pub struct FtUi {
    pub egui_ctx: egui::Context,
    pub design_tokens: DesignTokens,
}

impl FtUi {
    /// Create [`FtUi`] and apply style to the given egui context.
    pub fn load_and_apply(egui_ctx: &egui::Context) -> Self {
        Self {
            egui_ctx: egui_ctx.clone(),
            design_tokens: DesignTokens::load_and_apply(egui_ctx),
        }
    }

    /// Margin on all sides of views.
    pub fn view_padding() -> f32 {
        12.0
    }

    pub fn window_rounding() -> f32 {
        12.0
    }

    pub fn normal_rounding() -> f32 {
        6.0
    }

    pub fn small_rounding() -> f32 {
        4.0
    }

    pub fn top_bar_margin() -> egui::Margin {
        egui::Margin::symmetric(8.0, 2.0)
    }

    /// Height of the top-most bar.
    pub fn top_bar_height() -> f32 {
        44.0
    }

    pub fn top_panel_frame(&self) -> egui::Frame {
        egui::Frame {
            inner_margin: Self::top_bar_margin(),
            fill: self.design_tokens.top_bar_color,
            ..Default::default()
        }
    }

    pub fn bottom_panel_margin(&self) -> egui::Vec2 {
        egui::Vec2::splat(8.0)
    }

    /// Status bar at the bottom of the window.
    pub fn bottom_panel_frame(&self) -> egui::Frame {
        // Show a stroke only on the top. To achieve this, we add a negative outer margin.
        // (on the inner margin we counteract this again)
        let margin_offset = self.design_tokens.bottom_bar_stroke.width * 0.5;

        let margin = self.bottom_panel_margin();

        egui::Frame {
            fill: self.design_tokens.bottom_bar_color,
            inner_margin: egui::Margin::symmetric(
                margin.x + margin_offset,
                margin.y + margin_offset,
            ),
            outer_margin: egui::Margin {
                left: -margin_offset,
                right: -margin_offset,
                // Add a proper stoke width thick margin on the top.
                top: self.design_tokens.bottom_bar_stroke.width,
                bottom: -margin_offset,
            },
            stroke: self.design_tokens.bottom_bar_stroke,
            rounding: self.design_tokens.bottom_bar_rounding,
            ..Default::default()
        }
    }

    /// Box the previews are drawn in, so the container width is visible.
    pub fn preview_frame(&self) -> egui::Frame {
        egui::Frame {
            inner_margin: egui::Margin::same(Self::view_padding()),
            fill: self.design_tokens.preview_color,
            stroke: self.design_tokens.bottom_bar_stroke,
            rounding: Self::normal_rounding().into(),
            ..Default::default()
        }
    }

    pub fn text_ellipsis(&self, text: &str, max_rows: usize) -> LayoutJob {
        text_ellipsis(&self.egui_ctx.style(), text, max_rows)
    }
}

/// Plain truncated label, the look [`FadingLabel`] replaces.
pub fn text_ellipsis(style: &egui::Style, text: &str, max_rows: usize) -> LayoutJob {
    let font_id = egui::TextStyle::Body.resolve(style);
    let color = style.visuals.text_color();
    let mut job =
        LayoutJob::single_section(text.to_string(), egui::TextFormat::simple(font_id, color));

    job.wrap = TextWrapping {
        max_rows,
        break_anywhere: false,
        overflow_character: Some('…'),
        ..TextWrapping::default()
    };

    job
}

#[test]
fn test_text_ellipsis() {
    let style = egui::Style::default();
    let job = text_ellipsis(&style, "Lorem ipsum", 2);
    assert_eq!(job.text, "Lorem ipsum");
    assert_eq!(job.wrap.max_rows, 2);
    assert_eq!(job.wrap.overflow_character, Some('…'));
}
