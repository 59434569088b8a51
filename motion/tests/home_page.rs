//! Home page motion scenarios, stepped with a fake frame clock.

use pretty_assertions::assert_eq;
use roche_motion::{
    CountUp, Direction, FrameDriver, MotionConfig, NavAppearance, Pose, Timeline, ViewportLatch,
};

/// Frame timestamps at ~60fps with some jitter, starting at `start_ms`.
fn frames(start_ms: f64, until_ms: f64) -> Vec<f64> {
    let mut stamps = Vec::new();
    let mut t = start_ms;
    let mut i = 0u32;
    while t <= until_ms {
        stamps.push(t);
        t += if i % 7 == 3 { 33.0 } else { 16.7 };
        i += 1;
    }
    stamps
}

/// A counter as mounted on the page: latch + driver, showing `initial` until the latch fires.
struct MountedCounter {
    latch: ViewportLatch,
    driver: FrameDriver<CountUp>,
    shown: i64,
}

impl MountedCounter {
    fn new(count: CountUp) -> Self {
        Self {
            latch: ViewportLatch::new(),
            shown: count.initial(),
            driver: FrameDriver::new(count),
        }
    }

    fn frame(&mut self, now_ms: f64) {
        if !self.latch.has_fired() {
            return;
        }
        if let Some(sample) = self.driver.on_frame(now_ms) {
            self.shown = sample.value;
        }
    }

    fn unmount(&mut self) {
        self.latch.dispose();
        self.driver.cancel();
    }
}

#[test]
fn stats_count_up_from_zero_to_exact_targets() {
    let config = MotionConfig::default();
    let targets = [15, 5000, 250, 30];
    let mut counters: Vec<MountedCounter> = targets
        .iter()
        .map(|&to| MountedCounter::new(config.count_up(0, to).unwrap()))
        .collect();

    // Before the stats row scrolls into view nothing moves.
    for stamp in frames(0.0, 500.0) {
        for counter in &mut counters {
            counter.latch.observe(false);
            counter.frame(stamp);
        }
    }
    assert_eq!(counters.iter().map(|c| c.shown).collect::<Vec<_>>(), vec![0, 0, 0, 0]);

    // Row enters view; each counter runs for two seconds.
    let mut history: Vec<Vec<i64>> = vec![Vec::new(); counters.len()];
    for stamp in frames(600.0, 2_700.0) {
        for (i, counter) in counters.iter_mut().enumerate() {
            counter.latch.observe(true);
            counter.frame(stamp);
            history[i].push(counter.shown);
        }
    }

    assert_eq!(
        counters.iter().map(|c| c.shown).collect::<Vec<_>>(),
        targets.to_vec()
    );
    for (values, &target) in history.iter().zip(&targets) {
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "non-decreasing for {target}");
        assert!(values.iter().all(|&v| (0..=target).contains(&v)));
    }
    assert!(counters.iter().all(|c| c.driver.is_finished()));
}

#[test]
fn five_thousand_counter_literal_values() {
    let mut driver = FrameDriver::new(CountUp::new(0, 5000, 2.0).unwrap());
    assert_eq!(driver.timeline().initial(), 0);
    assert_eq!(driver.on_frame(100.0).unwrap().value, 0);
    assert_eq!(driver.on_frame(600.0).unwrap().value, 1250);
    let end = driver.on_frame(2_100.0).unwrap();
    assert_eq!((end.value, end.done), (5000, true));
    assert!(!driver.wants_frame());
}

#[test]
fn unmount_mid_count_stops_all_frames() {
    let mut counter = MountedCounter::new(CountUp::new(0, 250, 2.0).unwrap());
    counter.latch.observe(true);
    counter.frame(0.0);
    counter.frame(500.0);
    let frozen = counter.shown;
    assert!(frozen > 0 && frozen < 250);

    counter.unmount();
    assert!(!counter.driver.wants_frame());
    for stamp in frames(516.0, 3_000.0) {
        assert!(counter.driver.on_frame(stamp).is_none());
    }
    assert_eq!(counter.shown, frozen);
}

#[test]
fn unmount_before_visible_never_fires() {
    let mut latch = ViewportLatch::new();
    latch.dispose();
    assert!(!latch.observe(true));
    assert!(!latch.has_fired());
}

#[test]
fn fade_in_hidden_until_visible_then_opaque_after_duration() {
    let config = MotionConfig::default();
    let reveal = config.fade(Direction::Up, 0.2).unwrap();
    let mut latch = ViewportLatch::new();
    let mut driver = FrameDriver::new(reveal);
    let mut pose = reveal.initial();
    let mut fires = 0;

    assert_eq!(pose.opacity, 0.0);
    assert_eq!(pose.y, 40.0);

    // In, out, back in: the trigger fires once.
    for (stamp, visible) in [(0.0, false), (100.0, true), (116.0, false), (132.0, true)] {
        if latch.observe(visible) {
            fires += 1;
        }
        if latch.has_fired() {
            if let Some(sample) = driver.on_frame(stamp) {
                pose = sample.value;
            }
        }
    }
    assert_eq!(fires, 1);
    assert!(pose.opacity < 1.0);

    // delay 0.2s + duration 0.8s after the first visible frame at 100ms.
    for stamp in frames(148.0, 1_200.0) {
        latch.observe(false);
        if let Some(sample) = driver.on_frame(stamp) {
            pose = sample.value;
        }
    }
    assert_eq!(pose, Pose::REST);
    assert!(driver.is_finished());
}

#[test]
fn parallax_hero_layers() {
    let config = MotionConfig::default();
    let primary = config.parallax("hero-primary").unwrap();
    assert_eq!(primary.apply(0.0), 0.0);
    assert_eq!(primary.apply(500.0), 200.0);
    assert_eq!(primary.apply(1000.0), 200.0);
    assert_eq!(primary.apply(-50.0), 0.0);

    let secondary = config.parallax("hero-secondary").unwrap();
    assert_eq!(secondary.apply(500.0), -150.0);
    assert_eq!(secondary.apply(9_999.0), -150.0);
}

#[test]
fn nav_tracks_latest_scroll_only() {
    let config = MotionConfig::default();
    let mut nav = config.nav_state();

    // Scroll down past the threshold, then bounce back up and down quickly.
    let feed = [0.0, 20.0, 21.0, 19.0, 25.0, 3.0, 40.0, 12.0];
    for y in feed {
        nav.on_scroll(y);
        assert_eq!(nav.is_scrolled(), y > 20.0, "after scroll to {y}");
    }
    assert_eq!(nav.appearance(), NavAppearance::Transparent);

    nav.toggle_menu();
    assert_eq!(nav.appearance(), NavAppearance::Solid);
    nav.on_scroll(19.0);
    assert!(nav.is_open());
    nav.on_navigate();
    assert!(!nav.is_open());
    assert_eq!(nav.appearance(), NavAppearance::Transparent);
}

#[test]
fn every_route_change_closes_the_menu() {
    let config = MotionConfig::default();
    let mut nav = config.nav_state();
    nav.on_scroll(0.0);

    // Brand link, desktop link, then browser back: each is just a new path.
    for path in ["/", "/products", "/about"] {
        nav.toggle_menu();
        assert_eq!(nav.appearance(), NavAppearance::Solid, "menu open before {path}");
        assert!(nav.on_navigate(), "route change to {path}");
        assert!(!nav.is_open());
        assert_eq!(nav.appearance(), NavAppearance::Transparent);
    }

    // The first run on mount, with the menu closed, reports no change.
    assert!(!nav.on_navigate());
}

#[test]
fn remount_starts_fresh() {
    let config = MotionConfig::default();
    let mut first = MountedCounter::new(config.count_up(0, 30).unwrap());
    first.latch.observe(true);
    first.frame(0.0);
    first.frame(5_000.0);
    assert_eq!(first.shown, 30);
    first.unmount();

    // Navigating back mounts a new counter; nothing carries over.
    let second = MountedCounter::new(config.count_up(0, 30).unwrap());
    assert!(!second.latch.has_fired());
    assert_eq!(second.shown, 0);
}
