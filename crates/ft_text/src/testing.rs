//! Fixed-width layout engine for tests: every character takes one cell.

use crate::{DisplayText, LayoutEngine, LayoutError, LayoutResult, LineLimits, OverflowMode};

pub const LINE_HEIGHT: f32 = 10.0;

/// Wraps at spaces (or mid-word when a word is longer than a line) and ends
/// an ellipsized last line two cells early to fit the marker.
pub struct CellEngine {
    pub columns: usize,
    pub cell_width: f32,
    pub passes: Vec<(String, OverflowMode)>,
}

impl CellEngine {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            cell_width: 10.0,
            passes: vec![],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CellLayout {
    chars: Vec<char>,
    lines: Vec<(usize, usize)>,
    overflow: bool,
    width: f32,
}

fn wrap(chars: &[char], columns: usize) -> Vec<(usize, usize)> {
    let columns = columns.max(1);
    let mut lines = vec![];
    let mut start = 0;
    while start < chars.len() {
        let mut end = start;
        let mut last_break = None;
        while end < chars.len() && chars[end] != '\n' && end - start < columns {
            if chars[end] == ' ' {
                last_break = Some(end + 1);
            }
            end += 1;
        }
        if end == chars.len() {
            lines.push((start, end));
            break;
        }
        if chars[end] == '\n' {
            lines.push((start, end + 1));
            start = end + 1;
            continue;
        }
        if chars[end] == ' ' {
            while end < chars.len() && chars[end] == ' ' {
                end += 1;
            }
            lines.push((start, end));
            start = end;
            continue;
        }
        let line_end = last_break.unwrap_or(end);
        lines.push((start, line_end));
        start = line_end;
    }
    if lines.is_empty() {
        lines.push((0, 0));
    }
    lines
}

impl LayoutEngine for CellEngine {
    type Layout = CellLayout;
    type Error = LayoutError;

    fn measure(
        &mut self,
        text: &DisplayText,
        limits: LineLimits,
        overflow: OverflowMode,
    ) -> Result<CellLayout, LayoutError> {
        if limits.min_lines == 0 || limits.min_lines > limits.max_lines {
            return Err(LayoutError::InvalidLineLimits {
                min: limits.min_lines,
                max: limits.max_lines,
            });
        }
        self.passes.push((text.text(), overflow));

        let chars: Vec<char> = text.text().chars().collect();
        let mut lines = wrap(&chars, self.columns);
        let overflow_detected = overflow != OverflowMode::Visible && lines.len() > limits.max_lines;
        if overflow_detected {
            lines.truncate(limits.max_lines);
            if overflow == OverflowMode::Ellipsis {
                if let Some((start, end)) = lines.last_mut() {
                    *end = end.saturating_sub(2).max(*start);
                }
            }
        }

        Ok(CellLayout {
            chars,
            lines,
            overflow: overflow_detected,
            width: self.columns as f32 * self.cell_width,
        })
    }
}

impl LayoutResult for CellLayout {
    fn has_visual_overflow(&self) -> bool {
        self.overflow
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_start(&self, line: usize) -> usize {
        self.lines[line].0
    }

    fn line_end(&self, line: usize, include_trailing_whitespace: bool) -> usize {
        let (start, mut end) = self.lines[line];
        if !include_trailing_whitespace {
            while end > start && self.chars[end - 1].is_whitespace() {
                end -= 1;
            }
        }
        end
    }

    fn line_top(&self, line: usize) -> f32 {
        line as f32 * LINE_HEIGHT
    }

    fn line_bottom(&self, line: usize) -> f32 {
        (line + 1) as f32 * LINE_HEIGHT
    }

    fn width(&self) -> f32 {
        self.width
    }
}

#[test]
fn test_wrap() {
    let chars: Vec<char> = "Lorem ipsum dolor sit amet consectetur".chars().collect();
    assert_eq!(wrap(&chars, 18), vec![(0, 18), (18, 27), (27, 38)]);
    let chars: Vec<char> = "ab\ncd".chars().collect();
    assert_eq!(wrap(&chars, 10), vec![(0, 3), (3, 5)]);
    assert_eq!(wrap(&[], 10), vec![(0, 0)]);
}
