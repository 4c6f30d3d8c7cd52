use crate::ConfigError;
use egui::Color32;

/// Fraction of the last line's width covered by the fade, in `0.0..=1.0`.
///
/// `0.0` means no visible fade, `1.0` fades from the very start of the line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurLineWidth(f32);

impl BlurLineWidth {
    pub const DEFAULT: Self = Self(0.2);

    pub fn new(value: f32) -> Result<Self, ConfigError> {
        // NaN fails the range check too.
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::BlurLineWidthOutOfRange(value))
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for BlurLineWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for BlurLineWidth {
    type Error = ConfigError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Line-count constraints handed to the layout engine as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineLimits {
    pub max_lines: usize,
    pub min_lines: usize,
}

impl Default for LineLimits {
    fn default() -> Self {
        Self {
            max_lines: usize::MAX,
            min_lines: 1,
        }
    }
}

impl LineLimits {
    pub fn max_lines(max_lines: usize) -> Self {
        Self {
            max_lines,
            ..Default::default()
        }
    }

    pub fn with_min_lines(mut self, min_lines: usize) -> Self {
        self.min_lines = min_lines;
        self
    }
}

/// Caller supplied settings for one render cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeConfig {
    pub blur_line_width: BlurLineWidth,
    pub limits: LineLimits,
    /// Color the gradient stops are derived from, see [`resolve_color`].
    pub base_color: Color32,
}

impl FadeConfig {
    pub fn new(base_color: Color32) -> Self {
        Self {
            blur_line_width: BlurLineWidth::default(),
            limits: LineLimits::default(),
            base_color,
        }
    }

    pub fn with_blur_line_width(mut self, blur_line_width: BlurLineWidth) -> Self {
        self.blur_line_width = blur_line_width;
        self
    }

    pub fn with_limits(mut self, limits: LineLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// Picks the first color that is set: an explicit override, then the color
/// inherited from the text style, then the contextual default.
pub fn resolve_color(
    explicit: Option<Color32>,
    inherited: Option<Color32>,
    context_default: Color32,
) -> Color32 {
    explicit.or(inherited).unwrap_or(context_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_line_width_range() {
        assert_eq!(
            BlurLineWidth::new(-0.1),
            Err(ConfigError::BlurLineWidthOutOfRange(-0.1))
        );
        assert_eq!(
            BlurLineWidth::new(1.1),
            Err(ConfigError::BlurLineWidthOutOfRange(1.1))
        );
        assert!(BlurLineWidth::new(f32::NAN).is_err());
        assert_eq!(BlurLineWidth::new(0.0).map(BlurLineWidth::get), Ok(0.0));
        assert_eq!(BlurLineWidth::new(1.0).map(BlurLineWidth::get), Ok(1.0));
        assert_eq!(BlurLineWidth::default().get(), 0.2);
    }

    #[test]
    fn test_try_from() {
        let width: Result<BlurLineWidth, _> = 0.5_f32.try_into();
        assert_eq!(width.map(BlurLineWidth::get), Ok(0.5));
        let width: Result<BlurLineWidth, _> = 2.0_f32.try_into();
        assert!(width.is_err());
    }

    #[test]
    fn test_resolve_color_order() {
        let explicit = Color32::RED;
        let inherited = Color32::GREEN;
        let ambient = Color32::BLUE;
        assert_eq!(
            resolve_color(Some(explicit), Some(inherited), ambient),
            explicit
        );
        assert_eq!(resolve_color(None, Some(inherited), ambient), inherited);
        assert_eq!(resolve_color(None, None, ambient), ambient);
    }

    #[test]
    fn test_default_limits() {
        let limits = LineLimits::default();
        assert_eq!(limits.max_lines, usize::MAX);
        assert_eq!(limits.min_lines, 1);
        assert_eq!(LineLimits::max_lines(3).with_min_lines(2).min_lines, 2);
    }
}
