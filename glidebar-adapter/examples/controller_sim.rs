use glidebar::{LayoutRect, TargetOffset};
use glidebar_adapter::{BarProps, BarStyle, Route, TabBarController, TabBarOptions};

fn main() {
    // Example: a navigator-driven bar without holding any UI objects.
    //
    // An adapter would:
    // - mount the controller from the navigator's first render
    // - forward layout reports as the host measures each tab (in any order)
    // - forward presses to the navigator and re-render with the new active index
    // - sample frame(now_ms) every display frame and draw it
    let routes = [
        Route::new("new", "New"),
        Route::new("profile", "Profile"),
        Route::new("settings", "Settings"),
    ];
    let opts = TabBarOptions::new()
        .with_style(BarStyle::default().with_safe_area_bottom(34.0))
        .with_on_change(Some(|c: &TabBarController<&'static str>, target: TargetOffset| {
            println!("target for tab {} -> {target:?}", c.active_index());
        }));
    let mut c = TabBarController::from_props(&BarProps::new(0, &routes), opts);

    for (index, x) in [(2usize, 250.0f32), (0, 10.0), (1, 130.0)] {
        c.on_layout(index, LayoutRect::new(x, 0.0, 60.0, 60.0), 0)
            .expect("active index is valid");
    }

    // The user taps "Settings"; the navigator updates its state and re-renders the bar.
    let mut active = 0usize;
    c.press(2, &mut |name: &str| {
        println!("navigate_to({name})");
        active = routes.iter().position(|r| r.name == name).unwrap_or(active);
    });

    let mut now_ms = 300u64;
    c.render(&BarProps::new(active, &routes), now_ms)
        .expect("route set is unchanged");
    while c.is_animating(now_ms) {
        now_ms += 16;
        let frame = c.frame(now_ms);
        let active = frame.active_item().map(|it| it.label.as_str());
        println!(
            "t={now_ms} x={:.2} active={active:?} scale={:.2}",
            frame.indicator.translate_x, frame.items[2].visual.emphasis_scale
        );
    }
}
