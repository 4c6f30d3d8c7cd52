use crate::app::LayoutStats;
use ft_core::{tracing, Setting};
use ft_text::{BlurLineWidth, LayoutResult};
use ft_ui::{FadingLabel, FtUi};

/// Shows the text twice: truncated with "…", then faded. Returns what the
/// fading label laid out, if it could.
pub fn preview_ui(ui: &mut egui::Ui, ft_ui: &FtUi, setting: &Setting) -> Option<LayoutStats> {
    let mut stats = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label("Ellipsis");
        ft_ui.preview_frame().show(ui, |ui| {
            ui.set_width(setting.container_width);
            let mut job = ft_ui.text_ellipsis(&setting.text, setting.max_lines);
            for section in &mut job.sections {
                section.format.font_id.size = setting.font_size;
            }
            ui.add(egui::Label::new(job).wrap(true));
        });

        ui.add_space(FtUi::view_padding());

        ui.label("Fade");
        ft_ui.preview_frame().show(ui, |ui| {
            ui.set_width(setting.container_width);
            let blur_line_width = match BlurLineWidth::new(setting.blur_line_width) {
                Ok(width) => width,
                Err(err) => {
                    tracing::warn!("{err}");
                    ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                    return;
                }
            };

            let mut lines = 0;
            let label = FadingLabel::new(setting.text.as_str())
                .font_size(setting.font_size)
                .max_lines(setting.max_lines)
                .min_lines(setting.min_lines)
                .blur_line_width(blur_line_width)
                .on_layout(|layout| lines = layout.line_count());
            match label.show(ui) {
                Ok(output) => {
                    stats = Some(LayoutStats {
                        lines,
                        overflow: output.faded,
                    });
                }
                Err(err) => {
                    ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                }
            }
        });
    });

    stats
}
