use crate::{AnimatedValue, AnimatorPhase, GlideOptions, TabVisualState};

/// Animated visual state of a single tab.
///
/// Reacts only to its own active flag. It knows nothing about layout or about other tabs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabItemAnimator {
    active: bool,
    inactive_icon_opacity: f32,
    emphasis_scale: AnimatedValue,
    icon_opacity: AnimatedValue,
}

impl TabItemAnimator {
    /// Creates an animator already at rest in the state implied by `active`.
    pub fn new(active: bool, options: &GlideOptions) -> Self {
        let inactive = options.inactive_icon_opacity;
        let (scale, opacity) = if active { (1.0, 1.0) } else { (0.0, inactive) };
        Self {
            active,
            inactive_icon_opacity: inactive,
            emphasis_scale: AnimatedValue::new(scale, options.duration_ms, options.easing),
            icon_opacity: AnimatedValue::new(opacity, options.duration_ms, options.easing),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the flag flipped and transitions were started.
    pub fn set_active(&mut self, active: bool, now_ms: u64) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        let (scale, opacity) = if active {
            (1.0, 1.0)
        } else {
            (0.0, self.inactive_icon_opacity)
        };
        self.emphasis_scale.animate_to(scale, now_ms);
        self.icon_opacity.animate_to(opacity, now_ms);
        true
    }

    pub fn visual_state(&self, now_ms: u64) -> TabVisualState {
        TabVisualState {
            emphasis_scale: self.emphasis_scale.value(now_ms),
            icon_opacity: self.icon_opacity.value(now_ms),
        }
    }

    pub fn phase(&self, now_ms: u64) -> AnimatorPhase {
        match (
            self.emphasis_scale.phase(now_ms),
            self.icon_opacity.phase(now_ms),
        ) {
            (AnimatorPhase::Settled, AnimatorPhase::Settled) => AnimatorPhase::Settled,
            _ => AnimatorPhase::Transitioning,
        }
    }
}
