//! Adapter utilities for the `glidebar` crate.
//!
//! The `glidebar` crate is UI-agnostic and focuses on layout tracking and animation state. This
//! crate provides the composition root an adapter needs to plug it into a navigator:
//!
//! - Route descriptors, per-route options and the `Navigator` seam
//! - `TabBarController`, which feeds layout reports and the active index through the engine
//! - Per-frame snapshots (`BarFrame`) ready to be drawn
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod frame;
mod key;
mod navigator;
mod options;
mod route;

#[cfg(test)]
mod tests;

pub use controller::TabBarController;
pub use error::BarError;
pub use frame::{BarFrame, IndicatorFrame, TabItemFrame};
pub use key::TabKey;
pub use navigator::{BarProps, Navigator};
pub use options::{BarStyle, INDICATOR_PATH, OnChangeCallback, TabBarOptions};
pub use route::{Route, RouteOptions, Tab};
