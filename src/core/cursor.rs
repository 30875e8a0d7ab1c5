use super::constants::{
    CURSOR_DEFAULT_STYLE, CURSOR_EXPAND_STYLE, CURSOR_LINK_STYLE, CURSOR_SPRING,
    CURSOR_TEXT_STYLE,
};
use super::spring::{Spring, SpringProfile};
use glam::Vec2;

/// Look of the follow cursor, chosen by whatever the pointer is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorKind {
    #[default]
    Default,
    Expand,
    Link,
    Text,
}

impl CursorKind {
    /// Unknown names fall back to the default look.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "expand" => Self::Expand,
            "link" => Self::Link,
            "text" => Self::Text,
            _ => Self::Default,
        }
    }

    pub fn style(self) -> CursorStyle {
        let (size_px, opacity, border_px) = match self {
            Self::Default => CURSOR_DEFAULT_STYLE,
            Self::Expand => CURSOR_EXPAND_STYLE,
            Self::Link => CURSOR_LINK_STYLE,
            Self::Text => CURSOR_TEXT_STYLE,
        };
        CursorStyle {
            size_px,
            opacity,
            border_px,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    pub size_px: f32,
    pub opacity: f32,
    pub border_px: f32,
}

/// A decorative cursor that trails the pointer through a spring.
///
/// The first sample places it directly under the pointer; later samples
/// only move the spring targets.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    x: Spring,
    y: Spring,
    kind: CursorKind,
    tracking: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(SpringProfile::from_tuple(CURSOR_SPRING))
    }
}

impl CursorFollower {
    pub fn new(profile: SpringProfile) -> Self {
        Self {
            x: Spring::new(0.0, profile),
            y: Spring::new(0.0, profile),
            kind: CursorKind::Default,
            tracking: false,
        }
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    #[inline]
    pub fn kind(&self) -> CursorKind {
        self.kind
    }

    pub fn on_pointer_move(&mut self, client: Vec2) {
        if !client.is_finite() {
            return;
        }
        if self.tracking {
            self.x.set_target(client.x);
            self.y.set_target(client.y);
        } else {
            self.x.jump(client.x);
            self.y.jump(client.y);
            self.tracking = true;
        }
    }

    /// Returns true when the look changed.
    pub fn set_kind(&mut self, kind: CursorKind) -> bool {
        let changed = self.kind != kind;
        self.kind = kind;
        changed
    }

    pub fn reset_kind(&mut self) -> bool {
        self.set_kind(CursorKind::Default)
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.x.step(dt_sec);
        self.y.step(dt_sec);
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    /// Smoothed centre of the cursor in viewport px.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    #[inline]
    pub fn style(&self) -> CursorStyle {
        self.kind.style()
    }
}
