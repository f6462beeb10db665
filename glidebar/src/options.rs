use crate::Easing;

/// Width of the indicator graphic's curved shoulder, left of the circle cut-out.
pub const INDICATOR_SHOULDER: f32 = 20.0;
/// Gap between the indicator's cut-out and the tab item circle.
pub const INDICATOR_GAP: f32 = 5.0;
/// Horizontal compensation applied to a tab's `x` to center the indicator behind it.
pub const INDICATOR_INSET: f32 = INDICATOR_SHOULDER + INDICATOR_GAP;
/// Duration of every transition, in milliseconds.
pub const TRANSITION_MS: u64 = 250;
/// Icon opacity of a tab that is not selected.
pub const INACTIVE_ICON_OPACITY: f32 = 0.5;

/// Configuration shared by the indicator and the tab item animators.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlideOptions {
    /// Subtracted from the active tab's `x` to obtain the indicator offset.
    pub indicator_inset: f32,
    pub duration_ms: u64,
    pub easing: Easing,
    pub inactive_icon_opacity: f32,
}

impl Default for GlideOptions {
    fn default() -> Self {
        Self {
            indicator_inset: INDICATOR_INSET,
            duration_ms: TRANSITION_MS,
            easing: Easing::EaseInOutQuad,
            inactive_icon_opacity: INACTIVE_ICON_OPACITY,
        }
    }
}

impl GlideOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indicator_inset(mut self, inset: f32) -> Self {
        self.indicator_inset = inset;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the inactive icon opacity, clamped to `[0, 1]`.
    pub fn with_inactive_icon_opacity(mut self, opacity: f32) -> Self {
        self.inactive_icon_opacity = opacity.clamp(0.0, 1.0);
        self
    }
}
