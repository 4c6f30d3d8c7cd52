use crate::BlurLineWidth;
use egui::{Color32, Pos2, Rangef, Rgba};

/// Alpha of one gradient stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StopAlpha {
    /// Multiplies the alpha of the base color.
    Scaled(f32),
    /// Replaces the alpha of the base color.
    Fixed(f32),
}

impl StopAlpha {
    pub fn apply(self, base_alpha: f32) -> f32 {
        match self {
            Self::Scaled(factor) => base_alpha * factor,
            Self::Fixed(alpha) => alpha,
        }
    }
}

/// The fade: mostly opaque, a quick drop, a short plateau, then transparent.
pub const FADE_STOPS: [StopAlpha; 5] = [
    StopAlpha::Scaled(0.9),
    StopAlpha::Scaled(0.3),
    StopAlpha::Fixed(0.1),
    StopAlpha::Fixed(0.1),
    StopAlpha::Fixed(0.0),
];

/// Linear gradient between two points with evenly spaced color stops.
///
/// Points before `start` or after `end` (projected on the gradient axis) take
/// the first or the last color.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientBrush {
    pub start: Pos2,
    pub end: Pos2,
    pub colors: Vec<Color32>,
}

impl GradientBrush {
    /// The fade over the tail of a line spanning `[top, bottom]` vertically
    /// and `[0, width]` horizontally.
    pub fn fade(base: Color32, width: f32, top: f32, bottom: f32, blur: BlurLineWidth) -> Self {
        let [r, g, b, a] = base.to_srgba_unmultiplied();
        let base_alpha = a as f32 / 255.0;
        let colors = FADE_STOPS
            .iter()
            .map(|stop| {
                let alpha = stop.apply(base_alpha).clamp(0.0, 1.0);
                Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8)
            })
            .collect();

        Self {
            start: Pos2::new(width - width * blur.get(), top),
            end: Pos2::new(width, bottom),
            colors,
        }
    }

    pub fn horizontal_span(&self) -> Rangef {
        Rangef::new(self.start.x.min(self.end.x), self.start.x.max(self.end.x))
    }

    /// Color of the gradient at `pos`. A zero-length axis paints the first stop.
    pub fn color_at(&self, pos: Pos2) -> Color32 {
        let Some(first) = self.colors.first().copied() else {
            return Color32::TRANSPARENT;
        };
        if self.colors.len() == 1 {
            return first;
        }

        let axis = self.end - self.start;
        let len_sq = axis.length_sq();
        if len_sq <= f32::EPSILON {
            return first;
        }

        let t = (pos - self.start).dot(axis) / len_sq;
        if t <= 0.0 {
            return first;
        }
        if t >= 1.0 {
            return self.colors[self.colors.len() - 1];
        }

        let segments = (self.colors.len() - 1) as f32;
        let scaled = t * segments;
        let index = (scaled.floor() as usize).min(self.colors.len() - 2);
        let local = scaled - index as f32;

        let from = Rgba::from(self.colors[index]);
        let to = Rgba::from(self.colors[index + 1]);
        Color32::from(from * (1.0 - local) + to * local)
    }
}
