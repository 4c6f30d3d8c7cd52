use crate::{DisplayText, LineLimits};

/// How the layout engine presents text that does not fit in `max_lines`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowMode {
    /// Cut with no marker.
    Clip,
    /// Cut and end the last line with "…".
    #[default]
    Ellipsis,
    /// Lay out every line, ignoring `max_lines`.
    Visible,
}

/// Line geometry of one layout pass.
///
/// Offsets count characters of the laid-out text, coordinates are relative to
/// the top left corner of the layout.
pub trait LayoutResult {
    fn has_visual_overflow(&self) -> bool;

    fn line_count(&self) -> usize;

    fn line_start(&self, line: usize) -> usize;

    /// Offset right after the last character of `line`.
    fn line_end(&self, line: usize, include_trailing_whitespace: bool) -> usize;

    fn line_top(&self, line: usize) -> f32;

    fn line_bottom(&self, line: usize) -> f32;

    fn width(&self) -> f32;
}

/// Text measurement backend. Fonts, sizes and decorations are the engine's
/// own business; the fade logic only passes text, limits and overflow mode.
pub trait LayoutEngine {
    type Layout: LayoutResult;
    type Error: std::error::Error + Send + Sync + 'static;

    fn measure(
        &mut self,
        text: &DisplayText,
        limits: LineLimits,
        overflow: OverflowMode,
    ) -> Result<Self::Layout, Self::Error>;

    /// Characters the engine drops from the last line to make room for its
    /// overflow glyph.
    fn ellipsis_reserve(&self) -> usize {
        2
    }
}
