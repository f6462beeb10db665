// Example: a tab flip interrupted mid-flight retargets from the current offset.
use glidebar::{GlideOptions, IndicatorAnimator, LayoutRegistry, TabItemAnimator};

fn main() {
    let opts = GlideOptions::default();
    let mut registry = LayoutRegistry::new(3);
    for (index, x) in [(0usize, 10.0f32), (1, 130.0), (2, 250.0)] {
        registry.record(index, x);
    }

    let mut indicator = IndicatorAnimator::new(&opts);
    let mut items: Vec<TabItemAnimator> =
        (0..3).map(|i| TabItemAnimator::new(i == 0, &opts)).collect();

    let mut select = |active: usize, now_ms: u64, indicator: &mut IndicatorAnimator| {
        let target = registry
            .resolve(active, opts.indicator_inset)
            .expect("active index is in range");
        indicator.set_target(target, now_ms);
        for (i, item) in items.iter_mut().enumerate() {
            item.set_active(i == active, now_ms);
        }
    };

    select(0, 0, &mut indicator);
    select(2, 300, &mut indicator);

    let mut now_ms = 300u64;
    loop {
        now_ms += 16;
        if now_ms == 364 {
            println!("-- flip to tab 1 --");
            select(1, now_ms, &mut indicator);
        }
        println!("t={now_ms} offset={:.2}", indicator.offset(now_ms));
        if !indicator.is_animating(now_ms) {
            break;
        }
    }
}
