use crate::{AnimatorPhase, TargetOffset};

/// A lightweight snapshot of the indicator at one instant.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorState {
    /// The animated offset, suitable for a `translate_x` binding.
    pub offset: f32,
    pub target: TargetOffset,
    pub phase: AnimatorPhase,
}
