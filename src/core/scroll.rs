use super::config::TrackerConfig;
use super::geometry::SectionBounds;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("scroll tracker needs at least one section")]
    NoSections,
    #[error("duplicate section id {0:?}")]
    DuplicateId(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    Idle,
    /// A programmatic scroll is in flight; scroll events are ignored
    /// until `until`.
    Navigating { until: Duration },
}

/// What the host should do with a native scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    Ignored,
    Coalesced,
    Scheduled { due: Duration },
}

/// Where the host should smooth-scroll to, in document px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerFrame {
    pub active_index: usize,
    pub is_navigating: bool,
}

/// Index of the first section whose activation band contains `probe`.
/// Sections without bounds are skipped.
pub fn locate_section(
    probe: f64,
    bounds: &[Option<SectionBounds>],
    section_top_offset: f64,
) -> Option<usize> {
    bounds.iter().enumerate().find_map(|(i, b)| {
        let b = (*b)?;
        let top = b.top - section_top_offset;
        (probe >= top && probe < top + b.height).then_some(i)
    })
}

/// Active-section tracker for one scroll container.
///
/// All timing is expressed against a caller-supplied monotonic `now`, so
/// the navigation window always closes on the next call after it elapses
/// whether or not a scroll-end is ever seen.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    config: TrackerConfig,
    sections: SmallVec<[Section; 8]>,
    index_by_id: FnvHashMap<String, usize>,
    active_index: usize,
    phase: NavPhase,
    probe_due: Option<Duration>,
}

impl ScrollTracker {
    pub fn new(
        sections: impl IntoIterator<Item = Section>,
        config: TrackerConfig,
    ) -> Result<Self, TrackerError> {
        let sections: SmallVec<[Section; 8]> = sections.into_iter().collect();
        if sections.is_empty() {
            return Err(TrackerError::NoSections);
        }
        let mut index_by_id = FnvHashMap::default();
        for (i, s) in sections.iter().enumerate() {
            if index_by_id.insert(s.id.clone(), i).is_some() {
                return Err(TrackerError::DuplicateId(s.id.clone()));
            }
        }
        Ok(Self {
            config,
            sections,
            index_by_id,
            active_index: 0,
            phase: NavPhase::Idle,
            probe_due: None,
        })
    }

    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_section(&self) -> &Section {
        &self.sections[self.active_index]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn is_navigating(&self, now: Duration) -> bool {
        matches!(self.phase, NavPhase::Navigating { until } if now < until)
    }

    pub fn frame(&self, now: Duration) -> TrackerFrame {
        TrackerFrame {
            active_index: self.active_index(),
            is_navigating: self.is_navigating(now),
        }
    }

    /// Closes an elapsed navigation window. Returns true on the
    /// `Navigating -> Idle` transition.
    pub fn expire(&mut self, now: Duration) -> bool {
        match self.phase {
            NavPhase::Navigating { until } if now >= until => {
                self.phase = NavPhase::Idle;
                log::debug!(
                    "[scroll] navigation settled on {:?}",
                    self.sections[self.active_index].id
                );
                true
            }
            _ => false,
        }
    }

    /// Optimistically activates `index` and asks the host to scroll there.
    /// A call while already navigating restarts the window.
    pub fn navigate_to_section(
        &mut self,
        index: usize,
        bounds: Option<SectionBounds>,
        now: Duration,
    ) -> Option<ScrollRequest> {
        if index >= self.sections.len() {
            return None;
        }
        let bounds = bounds?;
        self.active_index = index;
        self.phase = NavPhase::Navigating {
            until: now + self.config.nav_timeout,
        };
        self.probe_due = None;
        log::debug!("[scroll] navigate to {:?}", self.sections[index].id);
        Some(ScrollRequest {
            top: bounds.top - self.config.nav_scroll_offset,
        })
    }

    /// Navigation by section id. `bounds_of` measures the resolved section
    /// and is only called for a known id.
    pub fn navigate_to_id(
        &mut self,
        id: &str,
        bounds_of: impl FnOnce(usize) -> Option<SectionBounds>,
        now: Duration,
    ) -> Option<ScrollRequest> {
        let index = self.index_of(id)?;
        self.navigate_to_section(index, bounds_of(index), now)
    }

    /// Throttles native scroll events into one probe per window.
    pub fn on_scroll(&mut self, now: Duration) -> ScrollAction {
        self.expire(now);
        if self.is_navigating(now) {
            return ScrollAction::Ignored;
        }
        if self.probe_due.is_some() {
            return ScrollAction::Coalesced;
        }
        let due = now + self.config.throttle;
        self.probe_due = Some(due);
        ScrollAction::Scheduled { due }
    }

    /// Asks for a probe on the next check, without waiting out the
    /// throttle. Used at mount so a restored scroll position is reflected
    /// before the first scroll event.
    pub fn request_probe(&mut self, now: Duration) -> ScrollAction {
        self.expire(now);
        if self.is_navigating(now) {
            return ScrollAction::Ignored;
        }
        let due = self.probe_due.map_or(now, |pending| pending.min(now));
        self.probe_due = Some(due);
        ScrollAction::Scheduled { due }
    }

    pub fn probe_due(&mut self, now: Duration) -> bool {
        self.expire(now);
        matches!(self.probe_due, Some(due) if now >= due)
    }

    /// Runs the pending probe against freshly measured section bounds.
    /// Returns the new index when the active section changed.
    pub fn probe(
        &mut self,
        scroll_y: f64,
        bounds: &[Option<SectionBounds>],
        now: Duration,
    ) -> Option<usize> {
        self.probe_due = None;
        self.expire(now);
        if self.is_navigating(now) {
            return None;
        }
        let probe = scroll_y + self.config.probe_offset;
        let found = locate_section(probe, bounds, self.config.section_top_offset)
            .filter(|&i| i < self.sections.len())?;
        if found == self.active_index {
            return None;
        }
        self.active_index = found;
        log::debug!("[scroll] active section {:?}", self.sections[found].id);
        Some(found)
    }

    /// Drops pending work; used on teardown.
    pub fn cancel(&mut self) {
        self.probe_due = None;
        self.phase = NavPhase::Idle;
    }
}
