use crate::{Route, RouteOptions};

/// The outbound half of the navigator seam.
///
/// Requests are fire-and-forget: the controller never inspects whether navigation succeeded.
pub trait Navigator {
    fn navigate_to(&mut self, name: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate_to(&mut self, name: &str) {
        self(name)
    }
}

/// What the navigator hands to the tab bar on every render.
#[derive(Clone, Debug)]
pub struct BarProps<'a, K> {
    pub active_index: usize,
    pub routes: &'a [Route<K>],
    /// Options per route, in route order. Missing entries fall back to defaults.
    pub route_options: &'a [RouteOptions],
}

impl<'a, K> BarProps<'a, K> {
    pub fn new(active_index: usize, routes: &'a [Route<K>]) -> Self {
        Self {
            active_index,
            routes,
            route_options: &[],
        }
    }

    pub fn with_route_options(mut self, route_options: &'a [RouteOptions]) -> Self {
        self.route_options = route_options;
        self
    }
}
