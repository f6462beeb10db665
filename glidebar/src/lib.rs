//! A headless layout-tracking and indicator-animation engine for tab bars.
//!
//! For the composition root that wires this to a navigator, see the `glidebar-adapter` crate.
//!
//! The engine covers the parts of an animated tab bar that carry state and timing:
//! - collecting each tab's position as the host layout engine reports it, in any order
//! - resolving the indicator's target offset once every tab has been measured
//! - animating the indicator and each tab's emphasis toward their targets
//!
//! It is UI-agnostic. A host is expected to provide:
//! - layout reports per tab
//! - the active tab index
//! - a clock (`now_ms`) when sampling animated values
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animated;
mod error;
mod indicator;
mod item;
mod options;
mod registry;
mod resolver;
mod state;
mod tween;
mod types;


pub use animated::AnimatedValue;
pub use error::ResolveError;
pub use indicator::IndicatorAnimator;
pub use item::TabItemAnimator;
pub use options::{
    GlideOptions, INACTIVE_ICON_OPACITY, INDICATOR_GAP, INDICATOR_INSET, INDICATOR_SHOULDER,
    TRANSITION_MS,
};
pub use registry::{LayoutRegistry, RecordOutcome};
pub use resolver::resolve_target_offset;
pub use state::IndicatorState;
pub use tween::{Easing, Tween};
pub use types::{AnimatorPhase, LayoutMeasurement, LayoutRect, TabVisualState, TargetOffset};
