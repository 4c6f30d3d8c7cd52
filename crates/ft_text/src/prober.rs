use crate::{DisplayText, LayoutEngine, LayoutResult, LineLimits, OverflowMode};

/// Where the last visible line sits when the text overflows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverflowBoundary {
    pub line: usize,
    pub start: usize,
    /// End of the reclaimed text, never past the source text.
    pub truncated_end: usize,
    pub top: f32,
    pub bottom: f32,
    pub width: f32,
}

/// Lays out `text` with ellipsis overflow so the line breaks match a plain
/// truncated label.
pub fn probe<E: LayoutEngine>(
    engine: &mut E,
    text: &str,
    limits: LineLimits,
) -> Result<E::Layout, E::Error> {
    engine.measure(&DisplayText::plain(text), limits, OverflowMode::Ellipsis)
}

/// `None` when the layout fits.
pub fn overflow_boundary(
    layout: &impl LayoutResult,
    text_len: usize,
    reserve: usize,
) -> Option<OverflowBoundary> {
    if !layout.has_visual_overflow() {
        return None;
    }
    let line = layout.line_count().checked_sub(1)?;

    let truncated_end = layout
        .line_end(line, true)
        .saturating_add(reserve)
        .min(text_len);
    let start = layout.line_start(line).min(truncated_end);

    Some(OverflowBoundary {
        line,
        start,
        truncated_end,
        top: layout.line_top(line),
        bottom: layout.line_bottom(line),
        width: layout.width(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CellEngine;

    const LOREM: &str = "Lorem ipsum dolor sit amet consectetur";

    #[test]
    fn test_probe_uses_ellipsis() {
        let mut engine = CellEngine::new(18);
        let layout = probe(&mut engine, LOREM, LineLimits::max_lines(2)).unwrap();
        assert!(layout.has_visual_overflow());
        assert_eq!(layout.line_count(), 2);
        assert_eq!(
            engine.passes,
            vec![(LOREM.to_owned(), OverflowMode::Ellipsis)]
        );
    }

    #[test]
    fn test_boundary_of_last_line() {
        let mut engine = CellEngine::new(18);
        let layout = probe(&mut engine, LOREM, LineLimits::max_lines(2)).unwrap();
        let boundary = overflow_boundary(&layout, LOREM.chars().count(), 2).unwrap();
        assert_eq!(
            boundary,
            OverflowBoundary {
                line: 1,
                start: 18,
                truncated_end: 27,
                top: 10.0,
                bottom: 20.0,
                width: 180.0,
            }
        );
    }

    #[test]
    fn test_no_boundary_when_text_fits() {
        let mut engine = CellEngine::new(80);
        let layout = probe(&mut engine, LOREM, LineLimits::max_lines(1)).unwrap();
        assert_eq!(overflow_boundary(&layout, LOREM.chars().count(), 2), None);
    }

    #[test]
    fn test_boundary_clamped_to_text() {
        let mut engine = CellEngine::new(18);
        let layout = probe(&mut engine, LOREM, LineLimits::max_lines(1)).unwrap();
        let boundary = overflow_boundary(&layout, 17, 2).unwrap();
        assert_eq!(boundary.truncated_end, 17);
        let boundary = overflow_boundary(&layout, LOREM.chars().count(), 40).unwrap();
        assert_eq!(boundary.truncated_end, LOREM.chars().count());
    }
}
