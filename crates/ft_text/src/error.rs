use thiserror::Error;

/// Rejected before any layout work is done.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("blur_line_width must be in range from 0.0 to 1.0, got {0}")]
    BlurLineWidthOutOfRange(f32),
}

/// Failures of the egui layout backend.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("min_lines ({min}) must be at least 1 and not greater than max_lines ({max})")]
    InvalidLineLimits { min: usize, max: usize },
    #[error("max_width must not be negative, got {0}")]
    NegativeWidth(f32),
}
