// Host-side tests for the pointer tilt engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod tilt {
        include!("../src/core/tilt.rs");
    }
}

use glam::Vec2;
use motion::config::*;
use motion::geometry::Rect;
use motion::tilt::*;

const DT: f32 = 1.0 / 60.0;
const CARD: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

fn settle(engine: &mut TiltEngine, seconds: f32) {
    for _ in 0..(seconds / DT) as usize {
        engine.step(DT);
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn rotation_stays_within_amplitude_inside_bounds() {
    let rect = Rect::new(37.0, 410.0, 300.0, 180.0);
    let mut engine = TiltEngine::new(TiltConfig::default());
    let amplitude = TiltConfig::default().mapping.gain();
    for i in 1..40 {
        for j in 1..40 {
            let x = rect.left + rect.width * i as f32 / 40.0;
            let y = rect.top + rect.height * j as f32 / 40.0;
            engine.on_pointer_move(Vec2::new(x, y), Some(rect));
            let t = engine.targets();
            assert!(t.rotation_x.abs() <= amplitude, "rx {} at ({x},{y})", t.rotation_x);
            assert!(t.rotation_y.abs() <= amplitude, "ry {} at ({x},{y})", t.rotation_y);
        }
    }
}

#[test]
fn edges_map_to_full_amplitude() {
    let mut engine = TiltEngine::new(TiltConfig::default());

    engine.on_pointer_move(Vec2::new(100.0, 50.0), Some(CARD));
    assert_eq!(engine.targets().rotation_x, 0.0);
    assert_eq!(engine.targets().rotation_y, 0.0);

    // right edge tilts around Y, top edge tips the card back
    engine.on_pointer_move(Vec2::new(200.0, 50.0), Some(CARD));
    assert!(approx(engine.targets().rotation_y, 14.0));
    engine.on_pointer_move(Vec2::new(100.0, 0.0), Some(CARD));
    assert!(approx(engine.targets().rotation_x, 14.0));
    engine.on_pointer_move(Vec2::new(0.0, 100.0), Some(CARD));
    assert!(approx(engine.targets().rotation_x, -14.0));
    assert!(approx(engine.targets().rotation_y, -14.0));
}

#[test]
fn out_of_bounds_input_is_not_clamped() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    engine.on_pointer_move(Vec2::new(300.0, 50.0), Some(CARD));
    assert!(approx(engine.targets().rotation_y, 28.0));
}

#[test]
fn cursor_local_is_relative_to_top_left() {
    let rect = Rect::new(40.0, 15.0, 200.0, 100.0);
    let mut engine = TiltEngine::new(TiltConfig::default());
    engine.on_pointer_move(Vec2::new(90.0, 35.0), Some(rect));
    assert_eq!(engine.frame().cursor_local, Vec2::new(50.0, 20.0));
}

#[test]
fn caption_whip_follows_vertical_velocity() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    // offset_y goes 0 -> 10
    engine.on_pointer_move(Vec2::new(100.0, 60.0), Some(CARD));
    assert!(approx(engine.targets().caption_rotation, -6.0));
    // no vertical motion, no whip
    engine.on_pointer_move(Vec2::new(120.0, 60.0), Some(CARD));
    assert!(approx(engine.targets().caption_rotation, 0.0));
    // moving up whips the other way
    engine.on_pointer_move(Vec2::new(120.0, 55.0), Some(CARD));
    assert!(approx(engine.targets().caption_rotation, 3.0));
}

#[test]
fn enter_targets_hover_scale_and_tooltip() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    engine.on_pointer_enter();
    assert!(engine.is_hovered());
    let t = engine.targets();
    assert!(approx(t.scale, 1.1));
    assert_eq!(t.tooltip_opacity, 1.0);

    settle(&mut engine, 3.0);
    let f = engine.frame();
    assert!(approx(f.scale, 1.1));
    assert!(f.tooltip_opacity <= 1.0);
}

#[test]
fn leave_resets_to_idle_from_any_state() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    engine.on_pointer_enter();
    engine.on_pointer_move(Vec2::new(180.0, 10.0), Some(CARD));
    engine.on_pointer_move(Vec2::new(20.0, 90.0), Some(CARD));
    settle(&mut engine, 0.3);

    engine.on_pointer_leave();
    assert!(!engine.is_hovered());
    let t = engine.targets();
    assert_eq!(t.rotation_x, 0.0);
    assert_eq!(t.rotation_y, 0.0);
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.tooltip_opacity, 0.0);
    assert_eq!(t.caption_rotation, 0.0);

    settle(&mut engine, 4.0);
    let f = engine.frame();
    assert_eq!(f.rotation_x, 0.0);
    assert_eq!(f.rotation_y, 0.0);
    assert_eq!(f.scale, 1.0);
    assert_eq!(f.tooltip_opacity, 0.0);
    assert_eq!(f.caption_rotation, 0.0);
    // last known pointer position is kept for the fading caption
    assert_eq!(f.cursor_local, Vec2::new(20.0, 90.0));

    // leaving twice changes nothing
    engine.on_pointer_leave();
    settle(&mut engine, 0.5);
    assert_eq!(engine.frame(), f);
}

#[test]
fn repeated_identical_samples_reach_a_fixed_point() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    engine.on_pointer_enter();
    let client = Vec2::new(150.0, 30.0);
    for _ in 0..600 {
        engine.on_pointer_move(client, Some(CARD));
        engine.step(DT);
    }
    assert!(engine.is_settled());
    let converged = engine.frame();
    assert!(approx(converged.rotation_y, 7.0));
    assert!(approx(converged.rotation_x, 5.6));

    for _ in 0..120 {
        engine.on_pointer_move(client, Some(CARD));
        engine.step(DT);
        assert_eq!(engine.frame(), converged);
    }
}

#[test]
fn missing_or_degenerate_bounds_are_ignored() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    engine.on_pointer_move(Vec2::new(150.0, 30.0), Some(CARD));
    let before = engine.targets();

    engine.on_pointer_move(Vec2::new(10.0, 10.0), None);
    engine.on_pointer_move(Vec2::new(10.0, 10.0), Some(Rect::new(0.0, 0.0, 0.0, 100.0)));
    engine.on_pointer_move(Vec2::new(10.0, 10.0), Some(Rect::new(0.0, 0.0, 200.0, -5.0)));
    engine.on_pointer_move(Vec2::new(f32::NAN, 10.0), Some(CARD));
    assert_eq!(engine.targets(), before);
}

#[test]
fn smoothed_rotation_lags_then_converges() {
    let mut engine = TiltEngine::new(TiltConfig::default());
    engine.on_pointer_move(Vec2::new(200.0, 50.0), Some(CARD));
    engine.step(DT);
    let early = engine.frame().rotation_y;
    assert!(early > 0.0 && early < 14.0);
    settle(&mut engine, 3.0);
    assert!(approx(engine.frame().rotation_y, 14.0));
}

#[test]
fn custom_amplitude_scales_rotation() {
    let cfg = TiltConfig::from_attrs(None, Some("10"), Some("1.05")).unwrap();
    let mut engine = TiltEngine::new(cfg);
    engine.on_pointer_move(Vec2::new(200.0, 50.0), Some(CARD));
    assert!(approx(engine.targets().rotation_y, 10.0));
    engine.on_pointer_enter();
    assert!(approx(engine.targets().scale, 1.05));
}

#[test]
fn config_attributes_are_validated() {
    assert_eq!(TiltConfig::from_attrs(None, None, None).unwrap(), TiltConfig::default());
    assert_eq!(
        TiltConfig::from_attrs(None, Some(" 12.5 "), None)
            .unwrap()
            .mapping,
        TiltMapping::Normalized { amplitude_deg: 12.5 }
    );
    assert!(matches!(
        TiltConfig::from_attrs(None, Some("steep"), None),
        Err(ConfigError::NotANumber { .. })
    ));
    assert!(matches!(
        TiltConfig::from_attrs(None, Some("-3"), None),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert!(matches!(
        TiltConfig::from_attrs(None, None, Some("0")),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert!(matches!(
        TiltConfig::from_attrs(None, Some("NaN"), None),
        Err(ConfigError::OutOfRange { .. })
    ));
}

#[test]
fn image_variant_tilts_per_pixel_without_normalising() {
    let mut engine = TiltEngine::new(TiltConfig::image());
    // 100 px right of centre is one degree, whatever the card size
    engine.on_pointer_move(Vec2::new(200.0, 50.0), Some(CARD));
    assert!(approx(engine.targets().rotation_y, 1.0));
    engine.on_pointer_move(Vec2::new(100.0, 0.0), Some(CARD));
    assert!(approx(engine.targets().rotation_x, 0.5));

    let wide = Rect::new(0.0, 0.0, 2000.0, 100.0);
    engine.on_pointer_move(Vec2::new(1100.0, 50.0), Some(wide));
    assert!(approx(engine.targets().rotation_y, 1.0));
    // no amplitude cap far outside the box either
    engine.on_pointer_move(Vec2::new(1200.0, 50.0), Some(CARD));
    assert!(approx(engine.targets().rotation_y, 11.0));
}

#[test]
fn image_variant_grows_on_move_and_resets_on_leave() {
    let mut engine = TiltEngine::new(TiltConfig::image());
    engine.on_pointer_move(Vec2::new(150.0, 50.0), Some(CARD));
    assert!(approx(engine.targets().scale, 1.02));

    settle(&mut engine, 3.0);
    assert!(approx(engine.frame().scale, 1.02));
    assert!(approx(engine.frame().rotation_y, 0.5));

    engine.on_pointer_leave();
    settle(&mut engine, 4.0);
    assert!(engine.is_settled());
    assert_eq!(engine.frame().scale, 1.0);
    assert_eq!(engine.frame().rotation_y, 0.0);
}

#[test]
fn variant_attribute_selects_the_base_config() {
    assert_eq!(
        TiltConfig::from_attrs(Some("image"), None, None).unwrap(),
        TiltConfig::image()
    );
    assert_eq!(
        TiltConfig::from_attrs(Some(""), None, None).unwrap(),
        TiltConfig::default()
    );
    assert_eq!(
        TiltConfig::from_attrs(Some("card"), None, None).unwrap(),
        TiltConfig::default()
    );
    assert!(matches!(
        TiltConfig::from_attrs(Some("poster"), None, None),
        Err(ConfigError::UnknownVariant(_))
    ));
    // amplitude is per-pixel gain for images, with its own range
    assert_eq!(
        TiltConfig::from_attrs(Some("image"), Some("0.02"), None)
            .unwrap()
            .mapping,
        TiltMapping::PerPixel { deg_per_px: 0.02 }
    );
    assert!(matches!(
        TiltConfig::from_attrs(Some("image"), Some("14"), None),
        Err(ConfigError::OutOfRange { .. })
    ));
}
