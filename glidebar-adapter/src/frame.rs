use alloc::string::String;
use alloc::vec::Vec;

use glidebar::{AnimatorPhase, TabVisualState, TargetOffset};

/// The indicator graphic as it should be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorFrame {
    pub translate_x: f32,
    pub target: TargetOffset,
    pub phase: AnimatorPhase,
    pub width: f32,
    pub height: f32,
}

/// One pressable tab as it should be drawn this frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabItemFrame<K> {
    pub key: K,
    pub index: usize,
    pub label: String,
    pub accessibility_label: Option<String>,
    pub test_id: Option<String>,
    pub is_active: bool,
    pub visual: TabVisualState,
    pub size: f32,
    /// Vertical offset relative to the bar's top edge (negative = raised).
    pub offset_y: f32,
}

/// A full snapshot of the bar for one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarFrame<K> {
    pub indicator: IndicatorFrame,
    pub items: Vec<TabItemFrame<K>>,
    pub padding_bottom: f32,
    pub background_color: u32,
    pub accent_color: u32,
}

impl<K> BarFrame<K> {
    /// `true` once the indicator has reached its target. Tab items may still be fading.
    pub fn is_settled(&self) -> bool {
        self.indicator.phase == AnimatorPhase::Settled
    }

    pub fn active_item(&self) -> Option<&TabItemFrame<K>> {
        self.items.iter().find(|it| it.is_active)
    }
}
