// Example: measurements arrive out of order, then the indicator glides to the active tab.
use glidebar::{GlideOptions, IndicatorAnimator, LayoutRegistry};

fn main() {
    let opts = GlideOptions::default();
    let mut registry = LayoutRegistry::new(3);
    let mut indicator = IndicatorAnimator::new(&opts);
    let active = 1;

    for (now_ms, (index, x)) in [(1usize, 130.0f32), (0, 10.0), (2, 250.0)]
        .into_iter()
        .enumerate()
    {
        let outcome = registry.record(index, x);
        let target = registry
            .resolve(active, opts.indicator_inset)
            .expect("active index is in range");
        indicator.set_target(target, now_ms as u64);
        println!("record({index}, {x}) -> {outcome:?}, target={target:?}");
    }

    let mut now_ms = 2u64;
    while indicator.is_animating(now_ms) {
        println!("t={now_ms} offset={:.2}", indicator.offset(now_ms));
        now_ms += 16;
    }
    println!("settled: {:?}", indicator.state(now_ms));
}
