use super::constants::{REVEAL_OFFSET_PX, REVEAL_THRESHOLD};
use glam::Vec2;
use std::time::Duration;

/// Side the block slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl RevealDirection {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "up" | "" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Translation applied while hidden.
    pub fn hidden_offset(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, REVEAL_OFFSET_PX),
            Self::Down => Vec2::new(0.0, -REVEAL_OFFSET_PX),
            Self::Left => Vec2::new(REVEAL_OFFSET_PX, 0.0),
            Self::Right => Vec2::new(-REVEAL_OFFSET_PX, 0.0),
            Self::None => Vec2::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset: Vec2,
}

/// Latch-once reveal of a content block entering the viewport.
#[derive(Clone, Debug)]
pub struct Reveal {
    direction: RevealDirection,
    delay: Duration,
    threshold: f32,
    revealed_at: Option<Duration>,
}

impl Reveal {
    pub fn new(direction: RevealDirection, delay: Duration) -> Self {
        Self {
            direction,
            delay,
            threshold: REVEAL_THRESHOLD,
            revealed_at: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Feeds the currently visible fraction. True only on the first
    /// observation that crosses the threshold.
    pub fn observe(&mut self, visible_fraction: f32, now: Duration) -> bool {
        if self.revealed_at.is_some() || !(visible_fraction >= self.threshold) {
            return false;
        }
        self.revealed_at = Some(now);
        true
    }

    pub fn is_visible(&self, now: Duration) -> bool {
        self.revealed_at
            .is_some_and(|at| now >= at + self.delay)
    }

    pub fn style(&self, now: Duration) -> RevealStyle {
        if self.is_visible(now) {
            RevealStyle {
                opacity: 1.0,
                offset: Vec2::ZERO,
            }
        } else {
            RevealStyle {
                opacity: 0.0,
                offset: self.direction.hidden_offset(),
            }
        }
    }
}

/// The reveal blocks of one page plus a pending-scan flag.
///
/// Measuring a block means a layout read, so blocks are only measured
/// after something could have moved them (mount, scroll, resize) and
/// never once all of them have latched.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    reveals: Vec<Reveal>,
    scan_pending: bool,
}

impl RevealSet {
    /// A new set starts with a scan pending so blocks already on screen
    /// reveal without waiting for a scroll.
    pub fn new(reveals: Vec<Reveal>) -> Self {
        let mut set = Self {
            reveals,
            scan_pending: false,
        };
        set.request_scan();
        set
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.reveals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reveals.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Reveal> {
        self.reveals.get(index)
    }

    pub fn is_complete(&self) -> bool {
        self.reveals.iter().all(Reveal::is_revealed)
    }

    pub fn request_scan(&mut self) {
        self.scan_pending = !self.is_complete();
    }

    /// Indexes to measure now, clearing the request. Empty when no scan
    /// was asked for.
    pub fn take_scan(&mut self) -> Vec<usize> {
        if !std::mem::take(&mut self.scan_pending) {
            return Vec::new();
        }
        self.reveals
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.is_revealed())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn observe(&mut self, index: usize, visible_fraction: f32, now: Duration) -> bool {
        self.reveals
            .get_mut(index)
            .is_some_and(|r| r.observe(visible_fraction, now))
    }
}
