use crate::GradientBrush;

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// The caller's base style.
    Plain,
    Gradient(GradientBrush),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub paint: Paint,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            paint: Paint::Plain,
        }
    }

    pub fn gradient(text: impl Into<String>, brush: GradientBrush) -> Self {
        Self {
            text: text.into(),
            paint: Paint::Gradient(brush),
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// The text handed to the final layout pass, as an ordered list of runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayText {
    runs: Vec<TextRun>,
}

impl DisplayText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::plain(text)],
        }
    }

    /// Empty runs are dropped.
    pub fn push(&mut self, run: TextRun) {
        if !run.text.is_empty() {
            self.runs.push(run);
        }
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn gradient(&self) -> Option<&GradientBrush> {
        self.runs.iter().find_map(|run| match &run.paint {
            Paint::Gradient(brush) => Some(brush),
            Paint::Plain => None,
        })
    }

    /// Character offset where the gradient run begins.
    pub fn gradient_start(&self) -> Option<usize> {
        let mut offset = 0;
        for run in &self.runs {
            if matches!(run.paint, Paint::Gradient(_)) {
                return Some(offset);
            }
            offset += run.char_count();
        }
        None
    }
}

/// Byte index of the `n`th character, or the end of `text`.
pub(crate) fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map_or(text.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlurLineWidth;
    use egui::Color32;

    #[test]
    fn test_runs() {
        let brush = GradientBrush::fade(Color32::WHITE, 100.0, 0.0, 10.0, BlurLineWidth::DEFAULT);
        let mut display = DisplayText::default();
        display.push(TextRun::plain(""));
        display.push(TextRun::plain("héllo "));
        display.push(TextRun::gradient("wörld", brush.clone()));

        assert_eq!(display.runs().len(), 2);
        assert_eq!(display.text(), "héllo wörld");
        assert_eq!(display.gradient(), Some(&brush));
        assert_eq!(display.gradient_start(), Some(6));
        assert_eq!(DisplayText::plain("abc").gradient_start(), None);
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("héllo", 2), 3);
        assert_eq!(byte_offset("héllo", 5), 6);
        assert_eq!(byte_offset("héllo", 9), 6);
    }
}
