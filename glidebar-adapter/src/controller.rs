use alloc::vec::Vec;

use glidebar::{
    AnimatorPhase, IndicatorAnimator, IndicatorState, LayoutRect, LayoutRegistry, RecordOutcome,
    TabItemAnimator, TargetOffset,
};

use crate::{
    BarError, BarFrame, BarProps, IndicatorFrame, Navigator, Route, RouteOptions, Tab,
    TabBarOptions, TabItemFrame, TabKey,
};

/// A framework-neutral tab bar that wires a navigator and a layout engine to the glide engine.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `render(props, now_ms)` whenever the navigator re-renders the bar
/// - `on_layout(index, rect, now_ms)` whenever the layout engine reports a tab's box
/// - `press(index, navigator)` when a tab is pressed
/// - `tick(now_ms)` / `frame(now_ms)` each display frame to sample animated values
#[derive(Clone, Debug)]
pub struct TabBarController<K> {
    options: TabBarOptions<K>,
    tabs: Vec<Tab<K>>,
    route_options: Vec<RouteOptions>,
    active_index: usize,
    registry: LayoutRegistry,
    indicator: IndicatorAnimator,
    items: Vec<TabItemAnimator>,
}

impl<K: TabKey> TabBarController<K> {
    /// Mounts a bar for a fixed set of routes.
    ///
    /// Nothing is measured yet, so the indicator rests at `0` until every tab has reported.
    pub fn new(
        routes: impl IntoIterator<Item = Route<K>>,
        active_index: usize,
        options: TabBarOptions<K>,
    ) -> Self {
        let tabs: Vec<Tab<K>> = routes
            .into_iter()
            .enumerate()
            .map(|(index, r)| Tab {
                key: r.key,
                index,
                name: r.name,
            })
            .collect();
        let items = (0..tabs.len())
            .map(|i| TabItemAnimator::new(i == active_index, &options.glide))
            .collect();
        gdebug!(tab_count = tabs.len(), active_index, "TabBarController::new");
        Self {
            registry: LayoutRegistry::new(tabs.len()),
            indicator: IndicatorAnimator::new(&options.glide),
            route_options: Vec::new(),
            tabs,
            active_index,
            items,
            options,
        }
    }

    /// Mounts a bar from the first render's props.
    pub fn from_props(props: &BarProps<'_, K>, options: TabBarOptions<K>) -> Self {
        let mut c = Self::new(props.routes.iter().cloned(), props.active_index, options);
        c.route_options = props.route_options.to_vec();
        c
    }

    pub fn options(&self) -> &TabBarOptions<K> {
        &self.options
    }

    pub fn tabs(&self) -> &[Tab<K>] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    pub fn indicator(&self) -> &IndicatorAnimator {
        &self.indicator
    }

    pub fn item(&self, index: usize) -> Option<&TabItemAnimator> {
        self.items.get(index)
    }

    pub fn target(&self) -> TargetOffset {
        self.indicator.target()
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.tabs.iter().position(|t| &t.key == key)
    }

    /// Updates the bottom safe-area inset (e.g. after rotation).
    pub fn set_safe_area_bottom(&mut self, bottom: f32) {
        self.options.style = self.options.style.with_safe_area_bottom(bottom);
    }

    /// Call this when the layout engine reports the box of the tab at `index`.
    ///
    /// Re-measurements are accepted at any time. Reports for unknown indexes are ignored.
    pub fn on_layout(
        &mut self,
        index: usize,
        rect: LayoutRect,
        now_ms: u64,
    ) -> Result<RecordOutcome, BarError> {
        let outcome = self.registry.record_rect(index, rect);
        if outcome.is_changed() {
            self.refresh(now_ms)?;
        }
        Ok(outcome)
    }

    /// Same as `on_layout`, for hosts that identify items by route key.
    pub fn on_layout_keyed(
        &mut self,
        key: &K,
        rect: LayoutRect,
        now_ms: u64,
    ) -> Result<RecordOutcome, BarError> {
        let Some(index) = self.index_of(key) else {
            gwarn!("on_layout_keyed: unknown route key");
            return Ok(RecordOutcome::Rejected);
        };
        self.on_layout(index, rect, now_ms)
    }

    /// Applies the navigator's active index.
    ///
    /// Fails if every tab has been measured and `active_index` does not name one of them.
    pub fn set_active_index(&mut self, active_index: usize, now_ms: u64) -> Result<(), BarError> {
        if active_index != self.active_index {
            gtrace!(from = self.active_index, to = active_index, now_ms, "set_active_index");
            self.active_index = active_index;
            for (i, item) in self.items.iter_mut().enumerate() {
                item.set_active(i == active_index, now_ms);
            }
        }
        self.refresh(now_ms)
    }

    /// Reads the navigator's props for this render.
    pub fn sync(&mut self, props: &BarProps<'_, K>, now_ms: u64) -> Result<(), BarError> {
        if props.routes.len() != self.tabs.len() {
            gwarn!(
                expected = self.tabs.len(),
                actual = props.routes.len(),
                "sync: route set changed after mount"
            );
            return Err(BarError::RoutesChanged {
                expected: self.tabs.len(),
                actual: props.routes.len(),
            });
        }
        if self.route_options.as_slice() != props.route_options {
            self.route_options = props.route_options.to_vec();
        }
        self.set_active_index(props.active_index, now_ms)
    }

    /// `sync` followed by `frame`.
    pub fn render(&mut self, props: &BarProps<'_, K>, now_ms: u64) -> Result<BarFrame<K>, BarError> {
        self.sync(props, now_ms)?;
        Ok(self.frame(now_ms))
    }

    /// Requests navigation to the tab at `index`.
    ///
    /// This does not depend on measurement and does not change the active index; the navigator
    /// reports the new index on its next render. Returns `false` for an unknown index.
    pub fn press(&self, index: usize, navigator: &mut impl Navigator) -> bool {
        let Some(tab) = self.tabs.get(index) else {
            gwarn!(index, tab_count = self.tabs.len(), "press: unknown tab index");
            return false;
        };
        navigator.navigate_to(&tab.name);
        true
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.indicator.is_animating(now_ms)
            || self
                .items
                .iter()
                .any(|it| it.phase(now_ms) == AnimatorPhase::Transitioning)
    }

    /// Samples the indicator only. Cheap enough for a per-frame animation loop.
    pub fn tick(&self, now_ms: u64) -> IndicatorState {
        self.indicator.state(now_ms)
    }

    pub fn indicator_frame(&self, now_ms: u64) -> IndicatorFrame {
        let s = self.indicator.state(now_ms);
        IndicatorFrame {
            translate_x: s.offset,
            target: s.target,
            phase: s.phase,
            width: self.options.style.indicator_width,
            height: self.options.style.indicator_height,
        }
    }

    /// Iterates over the tab items as they should be drawn at `now_ms`.
    pub fn for_each_item(&self, now_ms: u64, mut f: impl FnMut(TabItemFrame<K>)) {
        let style = &self.options.style;
        for (tab, anim) in self.tabs.iter().zip(&self.items) {
            let opts = self.route_options.get(tab.index);
            let label = opts
                .and_then(|o| o.title.clone())
                .unwrap_or_else(|| tab.name.clone());
            f(TabItemFrame {
                key: tab.key.clone(),
                index: tab.index,
                label,
                accessibility_label: opts.and_then(|o| o.accessibility_label.clone()),
                test_id: opts.and_then(|o| o.test_id.clone()),
                is_active: anim.is_active(),
                visual: anim.visual_state(now_ms),
                size: style.item_size,
                offset_y: -style.item_lift,
            });
        }
    }

    pub fn frame(&self, now_ms: u64) -> BarFrame<K> {
        let mut items = Vec::with_capacity(self.tabs.len());
        self.for_each_item(now_ms, |it| items.push(it));
        BarFrame {
            indicator: self.indicator_frame(now_ms),
            items,
            padding_bottom: self.options.style.safe_area_bottom,
            background_color: self.options.style.background_color,
            accent_color: self.options.style.accent_color,
        }
    }

    fn refresh(&mut self, now_ms: u64) -> Result<(), BarError> {
        let target = self
            .registry
            .resolve(self.active_index, self.options.glide.indicator_inset)?;
        let prev = self.indicator.target();
        self.indicator.set_target(target, now_ms);
        if target != prev {
            gtrace!(active_index = self.active_index, now_ms, "target changed");
            self.notify(target);
        }
        Ok(())
    }

    fn notify(&self, target: TargetOffset) {
        if let Some(cb) = &self.options.on_change {
            cb(self, target);
        }
    }
}
