use alloc::string::String;

/// A route descriptor from the navigator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<K> {
    pub key: K,
    pub name: String,
}

impl<K> Route<K> {
    pub fn new(key: K, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
        }
    }
}

/// Per-route presentation options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteOptions {
    /// Label shown for the tab; the route name is used when unset.
    pub title: Option<String>,
    pub accessibility_label: Option<String>,
    pub test_id: Option<String>,
}

impl RouteOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }
}

/// One selectable destination in the bar. Fixed for the controller's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tab<K> {
    pub key: K,
    pub index: usize,
    pub name: String,
}
