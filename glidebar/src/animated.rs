use crate::{AnimatorPhase, Easing, Tween};

/// A scalar that moves toward its target over a fixed duration.
///
/// Setting a new target while a transition is in flight restarts from the current sampled value,
/// so interrupted animations never jump back to where they started.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimatedValue {
    tween: Tween,
    duration_ms: u64,
}

impl AnimatedValue {
    pub fn new(value: f32, duration_ms: u64, easing: Easing) -> Self {
        Self {
            tween: Tween::settled(value, easing),
            duration_ms,
        }
    }

    pub fn target(&self) -> f32 {
        self.tween.to
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn value(&self, now_ms: u64) -> f32 {
        self.tween.sample(now_ms)
    }

    pub fn phase(&self, now_ms: u64) -> AnimatorPhase {
        if self.tween.is_done(now_ms) {
            AnimatorPhase::Settled
        } else {
            AnimatorPhase::Transitioning
        }
    }

    /// Starts a transition toward `to`.
    ///
    /// Returns `false` (and leaves any in-flight transition alone) when `to` already is the
    /// target.
    pub fn animate_to(&mut self, to: f32, now_ms: u64) -> bool {
        if self.tween.to == to {
            return false;
        }
        self.tween.retarget(now_ms, to, self.duration_ms);
        true
    }
}
