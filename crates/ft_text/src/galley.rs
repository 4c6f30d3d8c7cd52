//! egui backend: layout through [`egui::epaint::text::LayoutJob`], painting
//! through a recolored [`Galley`].

use crate::{DisplayText, LayoutEngine, LayoutError, LayoutResult, LineLimits, OverflowMode};
use egui::epaint::text::{Galley, LayoutJob, TextFormat, TextWrapping};
use egui::{Align, Color32, FontId, Pos2, Stroke};
use std::sync::Arc;

pub const OVERFLOW_CHARACTER: char = '…';

/// Styling passed straight through to every section of the layout job.
#[derive(Clone, Debug, PartialEq)]
pub struct TextParams {
    pub font_id: FontId,
    pub letter_spacing: f32,
    pub line_height: Option<f32>,
    pub italics: bool,
    pub underline: Stroke,
    pub strikethrough: Stroke,
    pub align: Align,
    pub max_width: f32,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            font_id: FontId::default(),
            letter_spacing: 0.0,
            line_height: None,
            italics: false,
            underline: Stroke::NONE,
            strikethrough: Stroke::NONE,
            align: Align::LEFT,
            max_width: f32::INFINITY,
        }
    }
}

impl TextParams {
    pub fn format(&self, color: Color32) -> TextFormat {
        TextFormat {
            font_id: self.font_id.clone(),
            extra_letter_spacing: self.letter_spacing,
            line_height: self.line_height,
            color,
            italics: self.italics,
            underline: self.underline,
            strikethrough: self.strikethrough,
            ..Default::default()
        }
    }
}

pub struct EguiLayoutEngine {
    ctx: egui::Context,
    params: TextParams,
    color: Color32,
}

impl EguiLayoutEngine {
    pub fn new(ctx: &egui::Context, params: TextParams, color: Color32) -> Self {
        Self {
            ctx: ctx.clone(),
            params,
            color,
        }
    }

    pub fn layout_job(
        &self,
        text: &DisplayText,
        limits: LineLimits,
        overflow: OverflowMode,
    ) -> LayoutJob {
        let mut job = LayoutJob {
            halign: self.params.align,
            ..Default::default()
        };
        // Gradient runs are laid out like plain ones, the brush is applied when painting.
        let format = self.params.format(self.color);
        for run in text.runs() {
            job.append(&run.text, 0.0, format.clone());
        }

        job.wrap = TextWrapping {
            max_width: self.params.max_width,
            max_rows: match overflow {
                OverflowMode::Visible => usize::MAX,
                OverflowMode::Clip | OverflowMode::Ellipsis => limits.max_lines,
            },
            break_anywhere: false,
            overflow_character: match overflow {
                OverflowMode::Ellipsis => Some(OVERFLOW_CHARACTER),
                OverflowMode::Clip | OverflowMode::Visible => None,
            },
        };

        job
    }
}

impl LayoutEngine for EguiLayoutEngine {
    type Layout = GalleyLayout;
    type Error = LayoutError;

    fn measure(
        &mut self,
        text: &DisplayText,
        limits: LineLimits,
        overflow: OverflowMode,
    ) -> Result<GalleyLayout, LayoutError> {
        if limits.min_lines == 0 || limits.min_lines > limits.max_lines {
            return Err(LayoutError::InvalidLineLimits {
                min: limits.min_lines,
                max: limits.max_lines,
            });
        }
        if !(self.params.max_width >= 0.0) {
            return Err(LayoutError::NegativeWidth(self.params.max_width));
        }

        let job = self.layout_job(text, limits, overflow);
        let galley = self.ctx.fonts(|fonts| fonts.layout_job(job));
        Ok(GalleyLayout::new(galley))
    }
}

/// [`LayoutResult`] view over a laid out [`Galley`].
#[derive(Clone, Debug)]
pub struct GalleyLayout {
    galley: Arc<Galley>,
    line_starts: Vec<usize>,
}

impl GalleyLayout {
    pub fn new(galley: Arc<Galley>) -> Self {
        let mut line_starts = Vec::with_capacity(galley.rows.len());
        let mut offset = 0;
        for row in &galley.rows {
            line_starts.push(offset);
            offset += row.glyphs.len() + usize::from(row.ends_with_newline);
        }
        Self {
            galley,
            line_starts,
        }
    }

    pub fn galley(&self) -> &Arc<Galley> {
        &self.galley
    }

    /// Size the widget needs to show this layout.
    pub fn size(&self) -> egui::Vec2 {
        self.galley.size()
    }

    /// Row containing the character at `offset`.
    pub fn line_of_offset(&self, offset: usize) -> usize {
        self.line_starts
            .iter()
            .rposition(|&start| start <= offset)
            .unwrap_or(0)
    }

    /// Characters of the source text shown on `line`, not counting a
    /// trailing newline or the overflow glyph.
    fn visible_chars(&self, line: usize) -> usize {
        let Some(row) = self.galley.rows.get(line) else {
            return 0;
        };
        let is_last = line + 1 == self.galley.rows.len();
        let overflow_char = self.galley.job.wrap.overflow_character;
        let ends_with_marker = overflow_char.is_some()
            && row.glyphs.last().map(|glyph| glyph.chr) == overflow_char;
        if self.galley.elided && is_last && ends_with_marker {
            row.glyphs.len() - 1
        } else {
            row.glyphs.len()
        }
    }
}

impl LayoutResult for GalleyLayout {
    fn has_visual_overflow(&self) -> bool {
        self.galley.elided
    }

    fn line_count(&self) -> usize {
        self.galley.rows.len()
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_starts.get(line).copied().unwrap_or(0)
    }

    fn line_end(&self, line: usize, include_trailing_whitespace: bool) -> usize {
        let Some(row) = self.galley.rows.get(line) else {
            return 0;
        };
        let start = self.line_start(line);
        let visible = self.visible_chars(line);
        if include_trailing_whitespace {
            return start + visible + usize::from(row.ends_with_newline);
        }
        let trailing = row.glyphs[..visible]
            .iter()
            .rev()
            .take_while(|glyph| glyph.chr.is_whitespace())
            .count();
        start + visible - trailing
    }

    fn line_top(&self, line: usize) -> f32 {
        self.galley
            .rows
            .get(line)
            .map_or(0.0, |row| row.rect.top() - self.galley.rect.top())
    }

    fn line_bottom(&self, line: usize) -> f32 {
        self.galley
            .rows
            .get(line)
            .map_or(0.0, |row| row.rect.bottom() - self.galley.rect.top())
    }

    fn width(&self) -> f32 {
        self.galley.rect.width()
    }
}

/// Copy of the layout's galley with every row from the gradient run onward
/// colored by the gradient brush. Returns the galley untouched when `display`
/// has no gradient run.
pub fn faded_galley(layout: &GalleyLayout, display: &DisplayText) -> Arc<Galley> {
    let (Some(brush), Some(start)) = (display.gradient(), display.gradient_start()) else {
        return layout.galley.clone();
    };

    let first_row = layout.line_of_offset(start);
    let top = layout.galley.rect.min.y;
    let mut galley = (*layout.galley).clone();
    for row in galley.rows.iter_mut().skip(first_row) {
        // Brush x is measured from the row's left edge, whatever the alignment.
        let origin = egui::vec2(row.rect.min.x, top);
        for vertex in &mut row.visuals.mesh.vertices {
            vertex.color = brush.color_at(vertex.pos - origin);
        }
    }
    Arc::new(galley)
}

/// Paints the layout at `pos`, the anchor point of the galley.
pub fn paint_galley(
    painter: &egui::Painter,
    pos: Pos2,
    layout: &GalleyLayout,
    display: &DisplayText,
    fallback_color: Color32,
) {
    painter.galley(pos, faded_galley(layout, display), fallback_color);
}
