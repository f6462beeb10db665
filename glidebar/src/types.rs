/// A box reported by the host layout engine, in the tab bar's local coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The horizontal position of one tab's box.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMeasurement {
    pub index: usize,
    pub x: f32,
}

/// Where the indicator should be, if that is known yet.
///
/// `Unknown` means at least one tab has not reported its layout. It is never conflated with a
/// tab measured at position `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetOffset {
    #[default]
    Unknown,
    Resolved(f32),
}

impl TargetOffset {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn value(&self) -> Option<f32> {
        match *self {
            Self::Unknown => None,
            Self::Resolved(v) => Some(v),
        }
    }

    /// The value an animator should move toward. `Unknown` parks the indicator at `0`.
    pub fn or_origin(&self) -> f32 {
        self.value().unwrap_or(0.0)
    }
}

/// Whether an animated value has reached its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimatorPhase {
    Settled,
    Transitioning,
}

/// Per-tab visual attributes sampled at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabVisualState {
    /// `0` when inactive, `1` when active.
    pub emphasis_scale: f32,
    /// `inactive_icon_opacity` when inactive, `1` when active.
    pub icon_opacity: f32,
}
