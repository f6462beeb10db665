use alloc::sync::Arc;

use glidebar::{GlideOptions, TargetOffset};

use crate::TabBarController;

/// A callback fired when the resolved indicator target changes.
pub type OnChangeCallback<K> = Arc<dyn Fn(&TabBarController<K>, TargetOffset) + Send + Sync>;

/// SVG path of the indicator graphic, drawn in a `0 0 110 60` view box.
///
/// The two outer 20-unit quarter circles are the shoulders accounted for by
/// [`glidebar::INDICATOR_SHOULDER`].
pub const INDICATOR_PATH: &str = "M20 0H0c11.046 0 20 8.954 20 20v5c0 19.33 15.67 35 35 35s35-15.67 35-35v-5c0-11.046 8.954-20 20-20H20z";

/// Static geometry and colours of the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarStyle {
    pub indicator_width: f32,
    pub indicator_height: f32,
    /// Tab items are square.
    pub item_size: f32,
    /// How far items are raised above the bar's top edge.
    pub item_lift: f32,
    /// Bottom safe-area inset reported by the host.
    pub safe_area_bottom: f32,
    /// `0xRRGGBB`.
    pub accent_color: u32,
    pub background_color: u32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            indicator_width: 110.0,
            indicator_height: 60.0,
            item_size: 60.0,
            item_lift: 5.0,
            safe_area_bottom: 0.0,
            accent_color: 0x604AE6,
            background_color: 0xFFFFFF,
        }
    }
}

impl BarStyle {
    pub fn with_safe_area_bottom(mut self, bottom: f32) -> Self {
        self.safe_area_bottom = bottom.max(0.0);
        self
    }

    pub fn with_accent_color(mut self, rgb: u32) -> Self {
        self.accent_color = rgb & 0xFF_FFFF;
        self
    }

    pub fn with_background_color(mut self, rgb: u32) -> Self {
        self.background_color = rgb & 0xFF_FFFF;
        self
    }
}

/// Configuration for [`crate::TabBarController`].
pub struct TabBarOptions<K> {
    pub glide: GlideOptions,
    pub style: BarStyle,
    /// Fired after the resolved target changes, once per distinct value.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> Default for TabBarOptions<K> {
    fn default() -> Self {
        Self {
            glide: GlideOptions::default(),
            style: BarStyle::default(),
            on_change: None,
        }
    }
}

impl<K> Clone for TabBarOptions<K> {
    fn clone(&self) -> Self {
        Self {
            glide: self.glide,
            style: self.style,
            on_change: self.on_change.clone(),
        }
    }
}

impl<K> TabBarOptions<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glide(mut self, glide: GlideOptions) -> Self {
        self.glide = glide;
        self
    }

    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&TabBarController<K>, TargetOffset) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for TabBarOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TabBarOptions")
            .field("glide", &self.glide)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
