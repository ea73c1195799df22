use super::ease::Ease;

/// Visual property a transition drives. Translations and rotation combine
/// additively when several specs hit the same target; scale and opacity
/// combine multiplicatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
    Opacity,
}

/// When a transition plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Plays once from the moment the section's entrance gate opens; never
    /// re-triggers.
    Entrance,
    /// Progress is a continuous function of the section's position in the
    /// viewport, remapped over the `[start, end]` sub-range.
    ScrollBound { start: f64, end: f64 },
    /// Forward/reverse alternation on a fixed period until unmount.
    Loop { period_ms: f64 },
    /// Offset proportional to pointer distance from center, scaled per
    /// element index, applied through smoothing by the binding layer.
    PointerFollow { strength: f64 },
}

/// One declared transition: a property driven from `from` to `to` under a
/// trigger, with per-element stagger across repeated targets.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSpec {
    pub target: &'static str,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub stagger_ms: f64,
    pub ease: Ease,
    pub trigger: Trigger,
}

impl TransitionSpec {
    pub fn entrance(target: &'static str, property: Property, from: f64, to: f64) -> Self {
        TransitionSpec {
            target,
            property,
            from,
            to,
            duration_ms: 800.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            ease: Ease::PowerOut(3),
            trigger: Trigger::Entrance,
        }
    }

    pub fn scroll_bound(
        target: &'static str,
        property: Property,
        from: f64,
        to: f64,
        start: f64,
        end: f64,
    ) -> Self {
        TransitionSpec {
            target,
            property,
            from,
            to,
            duration_ms: 0.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            ease: Ease::Linear,
            trigger: Trigger::ScrollBound { start, end },
        }
    }

    pub fn looping(
        target: &'static str,
        property: Property,
        from: f64,
        to: f64,
        period_ms: f64,
    ) -> Self {
        TransitionSpec {
            target,
            property,
            from,
            to,
            duration_ms: period_ms,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            ease: Ease::SineInOut,
            trigger: Trigger::Loop { period_ms },
        }
    }

    pub fn pointer_follow(target: &'static str, property: Property, strength: f64) -> Self {
        TransitionSpec {
            target,
            property,
            from: 0.0,
            to: 0.0,
            duration_ms: 0.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            ease: Ease::Linear,
            trigger: Trigger::PointerFollow { strength },
        }
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn stagger(mut self, ms: f64) -> Self {
        self.stagger_ms = ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Instant at which this transition settles for a given element index,
    /// measured from its trigger opening. `None` for triggers that never
    /// settle.
    pub fn settles_at(&self, index: usize) -> Option<f64> {
        match self.trigger {
            Trigger::Entrance => {
                Some(self.delay_ms + self.stagger_ms * index as f64 + self.duration_ms)
            }
            Trigger::ScrollBound { .. } => Some(0.0),
            Trigger::Loop { .. } | Trigger::PointerFollow { .. } => None,
        }
    }
}
