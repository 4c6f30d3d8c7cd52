use crate::display::byte_offset;
use crate::prober::overflow_boundary;
use crate::{DisplayText, FadeConfig, GradientBrush, LayoutResult, OverflowMode, TextRun};

/// Display text and overflow mode for the final layout pass. Both always come
/// from the same probe layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Recomposed {
    pub display: DisplayText,
    pub overflow: OverflowMode,
}

impl Recomposed {
    pub fn is_faded(&self) -> bool {
        self.display.gradient().is_some()
    }
}

/// Turns an ellipsis-truncated probe layout into a faded display text.
///
/// `reserve` is the number of characters the engine dropped to fit its
/// overflow glyph; they are put back so the fade covers real content.
pub fn finalize(
    text: &str,
    layout: &impl LayoutResult,
    config: &FadeConfig,
    reserve: usize,
) -> Recomposed {
    let Some(boundary) = overflow_boundary(layout, text.chars().count(), reserve) else {
        return Recomposed {
            display: DisplayText::plain(text),
            overflow: OverflowMode::Ellipsis,
        };
    };

    let visible = &text[..byte_offset(text, boundary.truncated_end)];
    let split = byte_offset(visible, boundary.start);
    let (prefix, tail) = visible.split_at(split);

    let brush = GradientBrush::fade(
        config.base_color,
        boundary.width,
        boundary.top,
        boundary.bottom,
        config.blur_line_width,
    );

    let mut display = DisplayText::default();
    display.push(TextRun::plain(prefix));
    display.push(TextRun::gradient(tail, brush));

    tracing::debug!(
        line = boundary.line,
        start = boundary.start,
        end = boundary.truncated_end,
        "text overflows, fading the last line"
    );

    Recomposed {
        display,
        overflow: OverflowMode::Clip,
    }
}
