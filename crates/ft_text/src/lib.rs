//! Text that fades out on its last visible line instead of ending with "…".
//!
//! A render is two layout passes: [`probe`] lays the text out with ellipsis
//! overflow to find where the last line breaks, then [`finalize`] rebuilds the
//! display text with a [`GradientBrush`] over the last line and switches the
//! final pass to [`OverflowMode::Clip`]. [`render_fading_text`] runs both.

mod config;
mod cycle;
mod display;
mod error;
pub mod galley;
mod gradient;
mod layout;
mod prober;
mod renderer;
#[cfg(test)]
mod testing;

pub use config::{resolve_color, BlurLineWidth, FadeConfig, LineLimits};
pub use cycle::{render_fading_text, CyclePhase, FadeCycle, Rendered};
pub use display::{DisplayText, Paint, TextRun};
pub use error::{ConfigError, LayoutError};
pub use galley::{EguiLayoutEngine, GalleyLayout, TextParams};
pub use gradient::{GradientBrush, StopAlpha, FADE_STOPS};
pub use layout::{LayoutEngine, LayoutResult, OverflowMode};
pub use prober::{overflow_boundary, probe, OverflowBoundary};
pub use renderer::{finalize, Recomposed};
