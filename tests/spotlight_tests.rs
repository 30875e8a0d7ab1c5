// Host-side tests for the spotlight coordinator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod spotlight {
        include!("../src/core/spotlight.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
}

use motion::config::SpotlightConfig;
use motion::spotlight::*;

const DT: f32 = 1.0 / 60.0;

fn group(n: usize) -> (Spotlight, Vec<SpotlightItem>) {
    let mut s = Spotlight::new(SpotlightConfig::default());
    let items = (0..n).map(|_| s.register()).collect();
    (s, items)
}

fn settle(s: &mut Spotlight) {
    for _ in 0..60 {
        s.step(DT);
    }
}

#[test]
fn hovering_one_item_dims_its_siblings() {
    let (mut s, items) = group(3);
    s.enter(items[1]);
    assert_eq!(s.target_opacity(items[0]), Some(0.2));
    assert_eq!(s.target_opacity(items[1]), Some(1.0));

    settle(&mut s);
    assert_eq!(s.opacity(items[0]), Some(0.2));
    assert_eq!(s.opacity(items[1]), Some(1.0));
    assert_eq!(s.opacity(items[2]), Some(0.2));

    s.leave(items[1]);
    settle(&mut s);
    for item in &items {
        assert_eq!(s.opacity(*item), Some(1.0));
    }
}

#[test]
fn fade_is_gradual() {
    let (mut s, items) = group(2);
    s.enter(items[0]);
    s.step(DT);
    let o = s.opacity(items[1]).unwrap();
    assert!(o < 1.0 && o > 0.2, "opacity {o}");
}

#[test]
fn stale_leave_does_not_clear_new_focus() {
    let (mut s, items) = group(3);
    s.enter(items[0]);
    // pointer moves straight onto a sibling: enter fires before the old leave
    s.enter(items[2]);
    s.leave(items[0]);
    assert_eq!(s.target_opacity(items[2]), Some(1.0));
    assert_eq!(s.target_opacity(items[0]), Some(0.2));
}

#[test]
fn foreign_items_are_ignored() {
    let (mut small, _) = group(2);
    let (_, big_items) = group(5);
    let foreign = big_items[4];
    small.enter(foreign);
    assert_eq!(small.opacity(foreign), None);
    assert_eq!(small.target_opacity(foreign), None);
    assert!(small.is_settled());
    assert_eq!(small.len(), 2);
    assert!(!small.is_empty());
}

#[test]
fn settles_after_the_fade_and_stays_settled() {
    let (mut s, items) = group(3);
    assert!(s.is_settled());

    s.enter(items[0]);
    assert!(!s.is_settled());
    settle(&mut s);
    assert!(s.is_settled());

    // further steps leave every opacity exactly where it is
    let before: Vec<_> = items.iter().map(|i| s.opacity(*i)).collect();
    s.step(DT);
    let after: Vec<_> = items.iter().map(|i| s.opacity(*i)).collect();
    assert_eq!(before, after);

    s.leave(items[0]);
    assert!(!s.is_settled());
}
