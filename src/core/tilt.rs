use super::config::{TiltConfig, TiltMapping};
use super::geometry::Rect;
use super::spring::Spring;
use glam::Vec2;

/// Everything the renderer needs to paint one tilt card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltFrame {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
    pub cursor_local: Vec2,
    pub tooltip_opacity: f32,
    pub caption_rotation: f32,
}

/// Pointer-to-3D-rotation engine for a single card.
///
/// Pointer handlers only move spring targets; `step` advances the springs
/// once per frame and `frame` reads the smoothed result.
#[derive(Clone, Debug)]
pub struct TiltEngine {
    config: TiltConfig,
    rotate_x: Spring,
    rotate_y: Spring,
    scale: Spring,
    opacity: Spring,
    caption_rotation: Spring,
    cursor_local: Vec2,
    last_offset_y: f32,
    hovered: bool,
}

impl TiltEngine {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            rotate_x: Spring::new(0.0, config.body_spring),
            rotate_y: Spring::new(0.0, config.body_spring),
            scale: Spring::new(1.0, config.body_spring),
            opacity: Spring::new(0.0, config.tooltip_spring),
            caption_rotation: Spring::new(0.0, config.caption_spring),
            cursor_local: Vec2::ZERO,
            last_offset_y: 0.0,
            hovered: false,
            config,
        }
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Feeds one pointer sample. `bounds` is the card's current viewport
    /// rect, or `None` when the element is gone; either that or an
    /// unusable rect leaves the engine untouched.
    pub fn on_pointer_move(&mut self, client: Vec2, bounds: Option<Rect>) {
        let Some(rect) = bounds.filter(Rect::is_usable) else {
            return;
        };
        if !client.is_finite() {
            return;
        }
        let offset = client - rect.center();
        let rotation = rotation_targets(self.config.mapping, offset, rect.half_extents());

        self.rotate_x.set_target(rotation.x);
        self.rotate_y.set_target(rotation.y);
        self.cursor_local = client - rect.origin();
        if self.config.scale_on_move {
            self.scale.set_target(self.config.scale_on_hover);
        }

        let velocity_y = offset.y - self.last_offset_y;
        self.caption_rotation
            .set_target(-velocity_y * self.config.caption_velocity_gain);
        self.last_offset_y = offset.y;
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
        self.scale.set_target(self.config.scale_on_hover);
        self.opacity.set_target(1.0);
    }

    /// Drives everything back to idle. The cursor position is kept so the
    /// caption fades out where it was.
    pub fn on_pointer_leave(&mut self) {
        self.hovered = false;
        self.opacity.set_target(0.0);
        self.scale.set_target(1.0);
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
        self.caption_rotation.set_target(0.0);
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.rotate_x.step(dt_sec);
        self.rotate_y.step(dt_sec);
        self.scale.step(dt_sec);
        self.opacity.step(dt_sec);
        self.caption_rotation.step(dt_sec);
    }

    /// True once every spring has settled; the renderer may skip painting.
    pub fn is_settled(&self) -> bool {
        self.rotate_x.is_at_rest()
            && self.rotate_y.is_at_rest()
            && self.scale.is_at_rest()
            && self.opacity.is_at_rest()
            && self.caption_rotation.is_at_rest()
    }

    /// Smoothed output for painting.
    pub fn frame(&self) -> TiltFrame {
        TiltFrame {
            rotation_x: self.rotate_x.value(),
            rotation_y: self.rotate_y.value(),
            scale: self.scale.value(),
            cursor_local: self.cursor_local,
            tooltip_opacity: self.opacity.value().clamp(0.0, 1.0),
            caption_rotation: self.caption_rotation.value(),
        }
    }

    /// Instantaneous targets the springs are chasing.
    #[cfg(test)]
    pub fn targets(&self) -> TiltFrame {
        TiltFrame {
            rotation_x: self.rotate_x.target(),
            rotation_y: self.rotate_y.target(),
            scale: self.scale.target(),
            cursor_local: self.cursor_local,
            tooltip_opacity: self.opacity.target(),
            caption_rotation: self.caption_rotation.target(),
        }
    }
}

/// (rotateX, rotateY) in degrees for a pointer `offset` from the centre.
/// Above centre gives positive rotateX, right of centre positive rotateY.
#[inline]
fn rotation_targets(mapping: TiltMapping, offset: Vec2, half: Vec2) -> Vec2 {
    let scaled = match mapping {
        TiltMapping::Normalized { amplitude_deg } => offset / half * amplitude_deg,
        TiltMapping::PerPixel { deg_per_px } => offset * deg_per_px,
    };
    Vec2::new(-scaled.y, scaled.x)
}
