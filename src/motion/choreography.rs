use super::pointer::PointerOffset;
use super::progress::remap;
use super::spec::{Property, TransitionSpec, Trigger};
use super::viewport::ViewportClass;

/// Per-frame input the binding layer feeds into sampling: wall-clock times,
/// the section's scroll progress, and the smoothed pointer offset (absent on
/// touch viewports).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionInput {
    /// Milliseconds since the section's entrance gate opened; `None` while
    /// the gate is still closed.
    pub entrance_ms: Option<f64>,
    /// Milliseconds since the section mounted; drives loops.
    pub clock_ms: f64,
    /// Section scroll progress in `[0, 1]`.
    pub progress: f64,
    pub pointer: Option<PointerOffset>,
}

/// Resolved visual state for one element. Starts from the identity and folds
/// in each matching transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub opacity: f64,
}

impl Default for Sample {
    fn default() -> Self {
        Sample {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate: 0.0,
            opacity: 1.0,
        }
    }
}

impl Sample {
    fn fold(&mut self, property: Property, value: f64) {
        match property {
            Property::TranslateX => self.x += value,
            Property::TranslateY => self.y += value,
            Property::Scale => self.scale *= value,
            Property::Rotate => self.rotate += value,
            Property::Opacity => self.opacity *= value,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.3}px, {:.3}px, 0) scale({:.4}) rotate({:.3}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }

    pub fn opacity(&self) -> String {
        format!("{:.4}", self.opacity.clamp(0.0, 1.0))
    }
}

/// Owns the declared transitions of one section. The rendering layer
/// schedules specs on mount, samples per frame, and cancels on unmount.
#[derive(Debug, Clone)]
pub struct Choreographer {
    class: ViewportClass,
    specs: Vec<TransitionSpec>,
}

impl Choreographer {
    pub fn new(class: ViewportClass) -> Self {
        Choreographer {
            class,
            specs: Vec::new(),
        }
    }

    /// Register a transition. Pointer-follow specs are refused outright on
    /// touch-classified viewports: the listener for them must never attach.
    pub fn schedule(&mut self, spec: TransitionSpec) {
        if self.class.is_touch() && matches!(spec.trigger, Trigger::PointerFollow { .. }) {
            return;
        }
        self.specs.push(spec);
    }

    pub fn schedule_all(&mut self, specs: impl IntoIterator<Item = TransitionSpec>) {
        for spec in specs {
            self.schedule(spec);
        }
    }

    pub fn cancel_all(&mut self) {
        self.specs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn has_pointer_follow(&self) -> bool {
        self.specs
            .iter()
            .any(|s| matches!(s.trigger, Trigger::PointerFollow { .. }))
    }

    /// Latest settle time across all scheduled transitions, or `None` if any
    /// of them runs indefinitely. Lets the binding layer park its frame loop
    /// once every finite timeline is done.
    pub fn settles_after(&self, max_index: usize) -> Option<f64> {
        self.specs
            .iter()
            .map(|s| s.settles_at(max_index))
            .try_fold(0.0f64, |acc, t| t.map(|t| acc.max(t)))
    }

    /// Resolve the visual state of element `index` within target group
    /// `target` for this frame.
    pub fn sample(&self, target: &str, index: usize, input: &MotionInput) -> Sample {
        let mut sample = Sample::default();
        for spec in self.specs.iter().filter(|s| s.target == target) {
            match spec.trigger {
                Trigger::Entrance => {
                    let value = match input.entrance_ms {
                        None => spec.from,
                        Some(t) => {
                            let local = t - spec.delay_ms - spec.stagger_ms * index as f64;
                            if local <= 0.0 {
                                spec.from
                            } else if local >= spec.duration_ms {
                                spec.to
                            } else {
                                let eased = spec.ease.apply(local / spec.duration_ms);
                                spec.from + (spec.to - spec.from) * eased
                            }
                        }
                    };
                    sample.fold(spec.property, value);
                }
                Trigger::ScrollBound { start, end } => {
                    let eased = spec.ease.apply(remap(input.progress, start, end));
                    sample.fold(spec.property, spec.from + (spec.to - spec.from) * eased);
                }
                Trigger::Loop { period_ms } => {
                    if period_ms <= 0.0 {
                        continue;
                    }
                    let local =
                        (input.clock_ms - spec.delay_ms - spec.stagger_ms * index as f64).max(0.0);
                    let cycle = local % (2.0 * period_ms);
                    let phase = if cycle < period_ms {
                        cycle / period_ms
                    } else {
                        2.0 - cycle / period_ms
                    };
                    let eased = spec.ease.apply(phase);
                    sample.fold(spec.property, spec.from + (spec.to - spec.from) * eased);
                }
                Trigger::PointerFollow { strength } => {
                    let Some(pointer) = input.pointer else {
                        continue;
                    };
                    let factor = strength * (index as f64 + 1.0);
                    let value = match spec.property {
                        Property::TranslateY => pointer.dy * factor,
                        // Rotation follows the horizontal axis, like the
                        // translate default.
                        _ => pointer.dx * factor,
                    };
                    sample.fold(spec.property, value);
                }
            }
        }
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ease::Ease;

    fn desktop() -> Choreographer {
        Choreographer::new(ViewportClass::Desktop)
    }

    fn input(entrance_ms: Option<f64>) -> MotionInput {
        MotionInput {
            entrance_ms,
            ..MotionInput::default()
        }
    }

    #[test]
    fn test_entrance_holds_initial_state_until_gate_opens() {
        let mut choreo = desktop();
        choreo.schedule(
            TransitionSpec::entrance("row", Property::Opacity, 0.0, 1.0).duration(600.0),
        );
        let sample = choreo.sample("row", 0, &input(None));
        assert_eq!(sample.opacity, 0.0);
    }

    #[test]
    fn test_entrance_runs_to_completion() {
        let mut choreo = desktop();
        choreo.schedule(
            TransitionSpec::entrance("row", Property::TranslateY, 40.0, 0.0)
                .duration(600.0)
                .ease(Ease::Linear),
        );
        assert_eq!(choreo.sample("row", 0, &input(Some(0.0))).y, 40.0);
        assert_eq!(choreo.sample("row", 0, &input(Some(300.0))).y, 20.0);
        assert_eq!(choreo.sample("row", 0, &input(Some(600.0))).y, 0.0);
        // Never re-triggers; the settled value holds.
        assert_eq!(choreo.sample("row", 0, &input(Some(10_000.0))).y, 0.0);
    }

    #[test]
    fn test_entrance_stagger_shifts_later_elements() {
        let mut choreo = desktop();
        choreo.schedule(
            TransitionSpec::entrance("pill", Property::Opacity, 0.0, 1.0)
                .duration(500.0)
                .stagger(100.0),
        );
        let at = input(Some(500.0));
        let first = choreo.sample("pill", 0, &at).opacity;
        let third = choreo.sample("pill", 2, &at).opacity;
        assert_eq!(first, 1.0);
        assert!(third < 1.0);
    }

    #[test]
    fn test_loop_alternates_forward_and_reverse() {
        let mut choreo = desktop();
        choreo.schedule(
            TransitionSpec::looping("blob", Property::Rotate, 0.0, 180.0, 1000.0)
                .ease(Ease::Linear),
        );
        let at = |clock_ms| MotionInput {
            clock_ms,
            ..MotionInput::default()
        };
        assert_eq!(choreo.sample("blob", 0, &at(0.0)).rotate, 0.0);
        assert_eq!(choreo.sample("blob", 0, &at(1000.0)).rotate, 180.0);
        assert_eq!(choreo.sample("blob", 0, &at(1500.0)).rotate, 90.0);
        assert_eq!(choreo.sample("blob", 0, &at(2000.0)).rotate, 0.0);
    }

    #[test]
    fn test_scroll_bound_follows_progress_subrange() {
        let mut choreo = desktop();
        choreo.schedule(TransitionSpec::scroll_bound(
            "text",
            Property::Opacity,
            1.0,
            0.0,
            0.0,
            0.8,
        ));
        let at = |progress| MotionInput {
            progress,
            ..MotionInput::default()
        };
        assert_eq!(choreo.sample("text", 0, &at(0.0)).opacity, 1.0);
        assert_eq!(choreo.sample("text", 0, &at(0.4)).opacity, 0.5);
        assert_eq!(choreo.sample("text", 0, &at(0.8)).opacity, 0.0);
        assert_eq!(choreo.sample("text", 0, &at(1.0)).opacity, 0.0);
    }

    #[test]
    fn test_pointer_follow_scales_with_index() {
        let mut choreo = desktop();
        choreo.schedule(TransitionSpec::pointer_follow(
            "icon",
            Property::TranslateX,
            1.0 / 80.0,
        ));
        let at = MotionInput {
            pointer: Some(PointerOffset { dx: 160.0, dy: 0.0 }),
            ..MotionInput::default()
        };
        assert_eq!(choreo.sample("icon", 0, &at).x, 2.0);
        assert_eq!(choreo.sample("icon", 2, &at).x, 6.0);
        // Without pointer input the follower stays at rest.
        let rest = choreo.sample("icon", 0, &MotionInput::default());
        assert_eq!(rest.x, 0.0);
    }

    #[test]
    fn test_touch_viewport_refuses_pointer_follow() {
        let mut choreo = Choreographer::new(ViewportClass::Touch);
        choreo.schedule(TransitionSpec::pointer_follow(
            "icon",
            Property::TranslateX,
            0.1,
        ));
        choreo.schedule(TransitionSpec::entrance("icon", Property::Opacity, 0.0, 1.0));
        assert!(!choreo.has_pointer_follow());
        assert_eq!(choreo.specs.len(), 1);
    }

    #[test]
    fn test_concurrent_specs_fold_into_one_sample() {
        let mut choreo = desktop();
        choreo.schedule(
            TransitionSpec::entrance("text", Property::Opacity, 0.0, 1.0)
                .duration(400.0)
                .ease(Ease::Linear),
        );
        choreo.schedule(TransitionSpec::scroll_bound(
            "text",
            Property::Opacity,
            1.0,
            0.0,
            0.0,
            1.0,
        ));
        let at = MotionInput {
            entrance_ms: Some(400.0),
            progress: 0.5,
            ..MotionInput::default()
        };
        // Entrance fully in (1.0) multiplied by the scroll fade (0.5).
        assert_eq!(choreo.sample("text", 0, &at).opacity, 0.5);
    }

    #[test]
    fn test_settles_after() {
        let mut choreo = desktop();
        choreo.schedule(
            TransitionSpec::entrance("row", Property::Opacity, 0.0, 1.0)
                .duration(600.0)
                .delay(200.0)
                .stagger(100.0),
        );
        assert_eq!(choreo.settles_after(3), Some(1100.0));
        choreo.schedule(TransitionSpec::looping("blob", Property::Rotate, 0.0, 360.0, 8000.0));
        assert_eq!(choreo.settles_after(3), None);
    }

    #[test]
    fn test_cancel_all_releases_everything() {
        let mut choreo = desktop();
        choreo.schedule(TransitionSpec::entrance("row", Property::Opacity, 0.0, 1.0));
        choreo.cancel_all();
        assert!(choreo.is_empty());
        let sample = choreo.sample("row", 0, &input(None));
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_transform_string_identity() {
        let sample = Sample::default();
        assert_eq!(
            sample.transform(),
            "translate3d(0.000px, 0.000px, 0) scale(1.0000) rotate(0.000deg)"
        );
        assert_eq!(sample.opacity(), "1.0000");
    }
}
