// Host-side tests for scroll reveal and viewport geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use glam::Vec2;
use motion::geometry::*;
use motion::reveal::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn visible_fraction_clips_to_viewport() {
    let vh = 800.0;
    assert_eq!(visible_fraction(Rect::new(0.0, 100.0, 50.0, 200.0), vh), 1.0);
    assert_eq!(visible_fraction(Rect::new(0.0, 700.0, 50.0, 200.0), vh), 0.5);
    assert_eq!(visible_fraction(Rect::new(0.0, -150.0, 50.0, 200.0), vh), 0.25);
    assert_eq!(visible_fraction(Rect::new(0.0, 900.0, 50.0, 200.0), vh), 0.0);
    assert_eq!(visible_fraction(Rect::new(0.0, 100.0, 50.0, 0.0), vh), 0.0);
    assert_eq!(visible_fraction(Rect::new(0.0, 100.0, 50.0, 200.0), 0.0), 0.0);
}

#[test]
fn section_bounds_are_document_relative() {
    let b = SectionBounds::from_viewport(-40.0, 300.0, 1000.0);
    assert_eq!(b, SectionBounds::new(960.0, 300.0));
}

#[test]
fn reveal_latches_at_threshold() {
    let mut r = Reveal::new(RevealDirection::Up, Duration::ZERO);
    assert!(!r.observe(0.05, ms(0)));
    assert!(!r.is_revealed());
    assert!(r.observe(0.1, ms(10)));
    assert!(r.is_revealed());
    // only the first crossing reports
    assert!(!r.observe(0.8, ms(20)));
    // scrolling away never hides it again
    assert!(!r.observe(0.0, ms(30)));
    assert!(r.is_visible(ms(30)));
}

#[test]
fn hidden_style_depends_on_direction() {
    let now = ms(0);
    let style = |d| Reveal::new(d, Duration::ZERO).style(now);
    assert_eq!(style(RevealDirection::Up).offset, Vec2::new(0.0, 30.0));
    assert_eq!(style(RevealDirection::Down).offset, Vec2::new(0.0, -30.0));
    assert_eq!(style(RevealDirection::Left).offset, Vec2::new(30.0, 0.0));
    assert_eq!(style(RevealDirection::Right).offset, Vec2::new(-30.0, 0.0));
    assert_eq!(style(RevealDirection::None).offset, Vec2::ZERO);
    assert_eq!(style(RevealDirection::Up).opacity, 0.0);
}

#[test]
fn delay_holds_the_hidden_style() {
    let mut r = Reveal::new(RevealDirection::Left, ms(300));
    r.observe(1.0, ms(1000));
    assert!(!r.is_visible(ms(1299)));
    assert_eq!(r.style(ms(1299)).opacity, 0.0);
    assert!(r.is_visible(ms(1300)));
    assert_eq!(
        r.style(ms(1300)),
        RevealStyle {
            opacity: 1.0,
            offset: Vec2::ZERO
        }
    );
}

#[test]
fn custom_threshold_is_clamped() {
    let mut r = Reveal::new(RevealDirection::Up, Duration::ZERO).with_threshold(2.0);
    assert!(!r.observe(0.99, ms(0)));
    assert!(r.observe(1.0, ms(0)));
}

#[test]
fn direction_parsing() {
    assert_eq!(RevealDirection::parse("up"), Some(RevealDirection::Up));
    assert_eq!(RevealDirection::parse(""), Some(RevealDirection::Up));
    assert_eq!(RevealDirection::parse(" left "), Some(RevealDirection::Left));
    assert_eq!(RevealDirection::parse("none"), Some(RevealDirection::None));
    assert_eq!(RevealDirection::parse("sideways"), None);
}

#[test]
fn reveal_set_measures_only_on_request() {
    let mut set = RevealSet::new(vec![
        Reveal::new(RevealDirection::Up, Duration::ZERO),
        Reveal::new(RevealDirection::Left, Duration::ZERO),
    ]);
    // mount asks for one pass over everything
    assert_eq!(set.take_scan(), vec![0, 1]);
    assert!(set.observe(0, 0.5, ms(0)));
    assert!(!set.observe(1, 0.0, ms(0)));

    // nothing moved since, nothing to measure
    assert!(set.take_scan().is_empty());
    assert!(set.take_scan().is_empty());

    // a scroll only re-measures blocks that are still hidden
    set.request_scan();
    assert_eq!(set.take_scan(), vec![1]);
    assert!(set.observe(1, 0.3, ms(16)));
    assert!(set.is_complete());

    // once everything latched, scrolling costs nothing
    set.request_scan();
    assert!(set.take_scan().is_empty());
    assert_eq!(set.len(), 2);
    assert!(set.get(1).is_some_and(Reveal::is_revealed));
    assert!(!set.observe(7, 1.0, ms(20)));
}

#[test]
fn empty_reveal_set_never_scans() {
    let mut set = RevealSet::new(Vec::new());
    assert!(set.is_empty());
    assert!(set.take_scan().is_empty());
}
