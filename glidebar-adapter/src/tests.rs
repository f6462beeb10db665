use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

use glidebar::{AnimatorPhase, LayoutRect, RecordOutcome, ResolveError, TargetOffset};

fn routes() -> Vec<Route<&'static str>> {
    alloc::vec![
        Route::new("new-1", "New"),
        Route::new("profile-2", "Profile"),
        Route::new("settings-3", "Settings"),
    ]
}

fn rect(x: f32) -> LayoutRect {
    LayoutRect::new(x, -5.0, 60.0, 60.0)
}

fn mounted(active: usize) -> TabBarController<&'static str> {
    TabBarController::new(routes(), active, TabBarOptions::default())
}

#[test]
fn layout_reports_resolve_indicator_only_when_complete() {
    let mut c = mounted(1);
    assert_eq!(c.on_layout(1, rect(130.0), 0), Ok(RecordOutcome::Inserted));
    assert_eq!(c.on_layout(0, rect(10.0), 5), Ok(RecordOutcome::Inserted));
    assert_eq!(c.target(), TargetOffset::Unknown);
    assert_eq!(c.tick(5).offset, 0.0);
    assert!(!c.is_animating(5));

    assert_eq!(c.on_layout(2, rect(250.0), 10), Ok(RecordOutcome::Inserted));
    assert_eq!(c.target(), TargetOffset::Resolved(105.0));
    assert_eq!(c.tick(10).phase, AnimatorPhase::Transitioning);
    assert_eq!(c.tick(260).offset, 105.0);
    assert!(!c.is_animating(260));
}

#[test]
fn rotation_remeasure_moves_the_indicator() {
    let mut c = mounted(2);
    for (i, x) in [(0, 10.0), (1, 130.0), (2, 250.0)] {
        c.on_layout(i, rect(x), 0).unwrap();
    }
    assert_eq!(c.tick(250).offset, 225.0);

    // Same value again: nothing to do.
    assert_eq!(c.on_layout(2, rect(250.0), 300), Ok(RecordOutcome::Unchanged));
    assert!(!c.is_animating(300));

    assert_eq!(c.on_layout(2, rect(400.0), 300), Ok(RecordOutcome::Replaced));
    assert_eq!(c.target(), TargetOffset::Resolved(375.0));
    assert_eq!(c.tick(300).offset, 225.0);
    assert_eq!(c.tick(550).offset, 375.0);
}

#[test]
fn render_flips_items_and_indicator_together() {
    let rs = routes();
    let mut c = TabBarController::from_props(&BarProps::new(0, &rs), TabBarOptions::default());
    for (i, x) in [(0, 10.0), (1, 130.0), (2, 250.0)] {
        c.on_layout(i, rect(x), 0).unwrap();
    }
    assert_eq!(c.tick(250).offset, -15.0);

    let frame = c.render(&BarProps::new(1, &rs), 1000).unwrap();
    assert_eq!(frame.active_item().map(|it| it.index), Some(1));
    assert_eq!(frame.indicator.translate_x, -15.0);
    assert_eq!(frame.items[1].visual.emphasis_scale, 0.0);

    let frame = c.frame(1125);
    assert!(!frame.is_settled());
    assert_eq!(frame.items[1].visual.emphasis_scale, 0.5);
    assert_eq!(frame.items[0].visual.icon_opacity, 0.75);
    assert_eq!(frame.items[2].visual.icon_opacity, 0.5);

    let frame = c.frame(1250);
    assert!(frame.is_settled());
    assert_eq!(frame.indicator.translate_x, 105.0);
    assert_eq!(frame.items[1].visual.emphasis_scale, 1.0);
    assert_eq!(frame.items[0].visual.emphasis_scale, 0.0);
    assert!(!c.is_animating(1250));
}

#[test]
fn press_requests_navigation_before_measurement() {
    let c = mounted(0);
    let mut calls: Vec<String> = Vec::new();
    let mut nav = |name: &str| calls.push(name.to_string());

    assert!(c.press(2, &mut nav));
    assert!(c.press(0, &mut nav));
    assert!(!c.press(3, &mut nav));
    assert_eq!(calls, ["Settings", "New"]);
    // Pressing does not move the selection; the navigator does.
    assert_eq!(c.active_index(), 0);
}

#[test]
fn out_of_range_active_index_fails_only_once_complete() {
    let mut c = mounted(0);
    c.on_layout(0, rect(10.0), 0).unwrap();
    assert_eq!(c.set_active_index(7, 10), Ok(()));
    assert_eq!(c.target(), TargetOffset::Unknown);

    c.on_layout(1, rect(130.0), 20).unwrap();
    let err = c.on_layout(2, rect(250.0), 30).unwrap_err();
    assert_eq!(
        err,
        BarError::Resolve(ResolveError::ActiveIndexOutOfRange {
            index: 7,
            tab_count: 3
        })
    );
    // The measurement itself is kept.
    assert!(c.registry().is_complete());

    assert_eq!(c.set_active_index(2, 40), Ok(()));
    assert_eq!(c.target(), TargetOffset::Resolved(225.0));
}

#[test]
fn render_rejects_changed_route_set() {
    let mut c = mounted(0);
    let mut rs = routes();
    rs.push(Route::new("extra", "Extra"));
    assert_eq!(
        c.render(&BarProps::new(0, &rs), 0),
        Err(BarError::RoutesChanged {
            expected: 3,
            actual: 4
        })
    );
}

#[test]
fn keyed_layout_reports_map_to_indexes() {
    let mut c = mounted(1);
    assert_eq!(c.index_of(&"profile-2"), Some(1));
    assert_eq!(
        c.on_layout_keyed(&"profile-2", rect(130.0), 0),
        Ok(RecordOutcome::Inserted)
    );
    assert_eq!(
        c.on_layout_keyed(&"missing", rect(1.0), 0),
        Ok(RecordOutcome::Rejected)
    );
    assert_eq!(c.on_layout(9, rect(1.0), 0), Ok(RecordOutcome::Rejected));
    assert_eq!(c.registry().len(), 1);
}

#[test]
fn on_change_fires_once_per_distinct_target() {
    let seen = Arc::new(Mutex::new(Vec::<TargetOffset>::new()));
    let opts = TabBarOptions::new().with_on_change(Some({
        let seen = Arc::clone(&seen);
        move |_: &TabBarController<&'static str>, t: TargetOffset| {
            seen.lock().unwrap().push(t);
        }
    }));
    let mut c = TabBarController::new(routes(), 0, opts);

    c.on_layout(0, rect(10.0), 0).unwrap();
    c.on_layout(1, rect(130.0), 0).unwrap();
    c.on_layout(2, rect(250.0), 0).unwrap();
    c.set_active_index(0, 10).unwrap();
    c.on_layout(1, rect(131.0), 20).unwrap();
    c.set_active_index(1, 30).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        [TargetOffset::Resolved(-15.0), TargetOffset::Resolved(106.0)]
    );
}

#[test]
fn frame_carries_style_and_route_options() {
    let rs = routes();
    let ro = [
        RouteOptions::default().with_title("Create"),
        RouteOptions::default()
            .with_accessibility_label("Your profile")
            .with_test_id("tab-profile"),
    ];
    let style = BarStyle::default()
        .with_safe_area_bottom(34.0)
        .with_accent_color(0xFF604AE6);
    let mut c = TabBarController::from_props(
        &BarProps::new(0, &rs).with_route_options(&ro),
        TabBarOptions::new().with_style(style),
    );

    let frame = c.frame(0);
    assert_eq!(frame.padding_bottom, 34.0);
    assert_eq!(frame.accent_color, 0x604AE6);
    assert_eq!(frame.background_color, 0xFFFFFF);
    assert_eq!(frame.indicator.width, 110.0);
    assert_eq!(frame.indicator.height, 60.0);

    let labels: Vec<&str> = frame.items.iter().map(|it| it.label.as_str()).collect();
    assert_eq!(labels, ["Create", "Profile", "Settings"]);
    assert_eq!(frame.items[1].accessibility_label.as_deref(), Some("Your profile"));
    assert_eq!(frame.items[1].test_id.as_deref(), Some("tab-profile"));
    assert_eq!(frame.items[0].key, "new-1");
    assert_eq!(frame.items[0].size, 60.0);
    assert_eq!(frame.items[0].offset_y, -5.0);

    c.set_safe_area_bottom(-3.0);
    assert_eq!(c.frame(0).padding_bottom, 0.0);

    // A later render without options falls back to route names.
    let frame = c.render(&BarProps::new(0, &rs), 0).unwrap();
    assert_eq!(frame.items[0].label, "New");
}

#[test]
fn single_tab_bar_resolves_on_first_report() {
    let mut c = TabBarController::new(
        [Route::new(1u32, "Only")],
        0,
        TabBarOptions::default(),
    );
    assert_eq!(c.target(), TargetOffset::Unknown);
    c.on_layout(0, rect(40.0), 0).unwrap();
    assert_eq!(c.target(), TargetOffset::Resolved(15.0));
    assert_eq!(c.tick(250).offset, 15.0);
    assert!(INDICATOR_PATH.starts_with("M20 0H0"));
}
