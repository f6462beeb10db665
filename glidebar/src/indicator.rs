use crate::{AnimatedValue, AnimatorPhase, GlideOptions, IndicatorState, TargetOffset};

/// Drives the indicator's horizontal offset toward the resolved target.
///
/// The animator starts settled at `0`. Each time the effective target changes (`Unknown` counts
/// as `0`), a transition starts from the current in-flight offset. There is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorAnimator {
    offset: AnimatedValue,
    target: TargetOffset,
}

impl IndicatorAnimator {
    pub fn new(options: &GlideOptions) -> Self {
        Self {
            offset: AnimatedValue::new(0.0, options.duration_ms, options.easing),
            target: TargetOffset::Unknown,
        }
    }

    pub fn target(&self) -> TargetOffset {
        self.target
    }

    /// Feeds a freshly resolved target.
    ///
    /// Returns `true` if a new transition was started.
    pub fn set_target(&mut self, target: TargetOffset, now_ms: u64) -> bool {
        self.target = target;
        let started = self.offset.animate_to(target.or_origin(), now_ms);
        if started {
            gtrace!(to = target.or_origin(), now_ms, "indicator retarget");
        }
        started
    }

    pub fn offset(&self, now_ms: u64) -> f32 {
        self.offset.value(now_ms)
    }

    pub fn phase(&self, now_ms: u64) -> AnimatorPhase {
        self.offset.phase(now_ms)
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.phase(now_ms) == AnimatorPhase::Transitioning
    }

    pub fn state(&self, now_ms: u64) -> IndicatorState {
        IndicatorState {
            offset: self.offset(now_ms),
            target: self.target,
            phase: self.phase(now_ms),
        }
    }
}
