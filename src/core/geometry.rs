use glam::Vec2;

/// Axis-aligned rectangle in viewport coordinates (CSS px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect is usable only with finite, positive extents. Detached
    /// elements report a zero-sized box.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Vertical placement of a section in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Builds document-relative bounds from a viewport rect and the
    /// current scroll position.
    #[inline]
    pub fn from_viewport(rect_top: f64, rect_height: f64, scroll_y: f64) -> Self {
        Self::new(rect_top + scroll_y, rect_height)
    }
}

/// Fraction of `rect`'s height that lies inside a viewport of the given
/// height, in [0, 1].
#[inline]
pub fn visible_fraction(rect: Rect, viewport_height: f32) -> f32 {
    if !rect.is_usable() || !(viewport_height > 0.0) {
        return 0.0;
    }
    let top = rect.top.max(0.0);
    let bottom = (rect.top + rect.height).min(viewport_height);
    ((bottom - top).max(0.0) / rect.height).clamp(0.0, 1.0)
}
