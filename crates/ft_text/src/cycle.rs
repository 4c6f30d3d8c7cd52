use crate::prober::probe;
use crate::renderer::{finalize, Recomposed};
use crate::{DisplayText, FadeConfig, LayoutEngine, OverflowMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CyclePhase {
    Initial,
    /// First layout pass done, with ellipsis overflow.
    Probed,
    /// Display text and overflow mode replaced after an overflow.
    Recomposed,
    Done,
}

/// Output of a finished cycle.
#[derive(Clone, Debug)]
pub struct Rendered<L> {
    pub display: DisplayText,
    pub overflow: OverflowMode,
    /// Layout of the last pass, the one to paint.
    pub layout: L,
    /// Layout passes it took: 1 when the text fits, 2 otherwise.
    pub passes: usize,
}

impl<L> Rendered<L> {
    pub fn is_faded(&self) -> bool {
        self.display.gradient().is_some()
    }
}

/// Probe, recompose and final layout for one text and configuration.
///
/// Changing the text or the configuration starts over from
/// [`CyclePhase::Initial`].
#[derive(Clone, Debug)]
pub struct FadeCycle {
    text: String,
    config: FadeConfig,
    phase: CyclePhase,
}

impl FadeCycle {
    pub fn new(text: impl Into<String>, config: FadeConfig) -> Self {
        Self {
            text: text.into(),
            config,
            phase: CyclePhase::Initial,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    pub fn set_input(&mut self, text: &str, config: FadeConfig) {
        if self.text != text || self.config != config {
            self.text = text.to_owned();
            self.config = config;
            self.advance(CyclePhase::Initial);
        }
    }

    /// Runs the layout passes. `on_layout` sees the final layout exactly once.
    pub fn run<E: LayoutEngine>(
        &mut self,
        engine: &mut E,
        on_layout: impl FnOnce(&E::Layout),
    ) -> Result<Rendered<E::Layout>, E::Error> {
        self.advance(CyclePhase::Initial);

        let probed = probe(engine, &self.text, self.config.limits)?;
        self.advance(CyclePhase::Probed);

        let Recomposed { display, overflow } =
            finalize(&self.text, &probed, &self.config, engine.ellipsis_reserve());

        let (layout, passes) = if overflow == OverflowMode::Clip {
            self.advance(CyclePhase::Recomposed);
            let layout = engine.measure(&display, self.config.limits, overflow)?;
            (layout, 2)
        } else {
            (probed, 1)
        };
        self.advance(CyclePhase::Done);

        on_layout(&layout);

        Ok(Rendered {
            display,
            overflow,
            layout,
            passes,
        })
    }

    fn advance(&mut self, phase: CyclePhase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "fade cycle");
        self.phase = phase;
    }
}

/// Lays out `text`, fading the tail of the last line if it does not fit.
pub fn render_fading_text<E: LayoutEngine>(
    engine: &mut E,
    text: &str,
    config: FadeConfig,
    on_layout: impl FnOnce(&E::Layout),
) -> Result<Rendered<E::Layout>, E::Error> {
    FadeCycle::new(text, config).run(engine, on_layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CellEngine;
    use crate::{LayoutError, LayoutResult, LineLimits};
    use egui::Color32;

    const LOREM: &str = "Lorem ipsum dolor sit amet consectetur";

    fn config(max_lines: usize) -> FadeConfig {
        FadeConfig::new(Color32::WHITE).with_limits(LineLimits::max_lines(max_lines))
    }

    #[test]
    fn test_fitting_text_takes_one_pass() {
        let mut engine = CellEngine::new(80);
        let mut cycle = FadeCycle::new(LOREM, config(1));
        let rendered = cycle.run(&mut engine, |_| {}).unwrap();
        assert_eq!(cycle.phase(), CyclePhase::Done);
        assert_eq!(rendered.passes, 1);
        assert_eq!(rendered.display.text(), LOREM);
        assert!(!rendered.is_faded());
        assert_eq!(engine.passes.len(), 1);
    }

    #[test]
    fn test_overflow_relayouts_with_clip() {
        let mut engine = CellEngine::new(18);
        let mut seen = vec![];
        let rendered = render_fading_text(&mut engine, LOREM, config(1), |layout| {
            seen.push(layout.line_count())
        })
        .unwrap();

        assert_eq!(seen, vec![1]);
        assert_eq!(rendered.passes, 2);
        assert_eq!(rendered.overflow, OverflowMode::Clip);
        assert_eq!(
            engine.passes,
            vec![
                (LOREM.to_owned(), OverflowMode::Ellipsis),
                ("Lorem ipsum dolor ".to_owned(), OverflowMode::Clip),
            ]
        );
    }

    #[test]
    fn test_repeated_cycles_are_identical() {
        let mut engine = CellEngine::new(18);
        let mut cycle = FadeCycle::new(LOREM, config(2));
        let first = cycle.run(&mut engine, |_| {}).unwrap();
        let second = cycle.run(&mut engine, |_| {}).unwrap();
        assert_eq!(first.display, second.display);
        assert_eq!(first.overflow, second.overflow);
        assert_eq!(first.layout, second.layout);
    }

    #[test]
    fn test_new_input_restarts() {
        let mut engine = CellEngine::new(18);
        let mut cycle = FadeCycle::new(LOREM, config(2));
        cycle.run(&mut engine, |_| {}).unwrap();
        assert_eq!(cycle.phase(), CyclePhase::Done);

        cycle.set_input(LOREM, config(2));
        assert_eq!(cycle.phase(), CyclePhase::Done);

        cycle.set_input("short", config(2));
        assert_eq!(cycle.phase(), CyclePhase::Initial);
        assert_eq!(cycle.text(), "short");
        let rendered = cycle.run(&mut engine, |_| {}).unwrap();
        assert_eq!(rendered.display.text(), "short");
    }

    #[test]
    fn test_engine_error_propagates() {
        let mut engine = CellEngine::new(18);
        let config = config(1).with_limits(LineLimits::max_lines(1).with_min_lines(3));
        let mut called = false;
        let err = render_fading_text(&mut engine, LOREM, config, |_| called = true).unwrap_err();
        assert_eq!(err, LayoutError::InvalidLineLimits { min: 3, max: 1 });
        assert!(!called);
        assert!(engine.passes.is_empty());
    }
}
