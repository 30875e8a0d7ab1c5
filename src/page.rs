use crate::constants::*;
use crate::core::{
    CursorFollower, CursorKind, Reveal, RevealDirection, RevealSet, ScrollTracker, Section,
    Spotlight, SpotlightConfig, SpotlightItem, TiltConfig, TiltEngine, TrackerConfig,
};
use crate::dom;
use crate::events;
use crate::frame::FrameLoop;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TiltCard {
    pub root: web::Element,
    pub body: Option<web::HtmlElement>,
    pub caption: Option<web::HtmlElement>,
    pub engine: TiltEngine,
}

pub struct FollowCursor {
    pub element: web::HtmlElement,
    pub follower: CursorFollower,
    pub painted_kind: Option<CursorKind>,
    pub painted_position: Option<Vec2>,
    /// Elements that restyle the cursor while hovered, with their kind.
    pub hover_targets: Vec<(web::Element, CursorKind)>,
}

pub struct TrackedNav {
    pub tracker: ScrollTracker,
    pub section_elements: Vec<web::Element>,
    pub nav_buttons: Vec<(usize, web::Element)>,
    pub painted_index: Option<usize>,
}

pub struct SpotlightGroup {
    pub spotlight: Spotlight,
    pub items: Vec<(SpotlightItem, web::HtmlElement)>,
}

/// Parallel to `PageState::reveal_set`, by index.
pub struct RevealBlock {
    pub element: web::HtmlElement,
    pub painted_visible: Option<bool>,
}

/// Everything the listeners and the frame loop share.
pub struct PageState {
    pub epoch: Instant,
    pub cards: Vec<TiltCard>,
    pub cursor: Option<FollowCursor>,
    pub nav: Option<TrackedNav>,
    pub spotlights: Vec<SpotlightGroup>,
    pub reveal_set: RevealSet,
    pub reveal_blocks: Vec<RevealBlock>,
}

impl PageState {
    /// Monotonic time since mount, the clock every engine runs on.
    #[inline]
    pub fn now(&self) -> Duration {
        Instant::now() - self.epoch
    }
}

/// A mounted page. Dropping it releases every listener and stops the
/// frame loop.
pub struct Page {
    state: Rc<RefCell<PageState>>,
    _subscriptions: Vec<dom::Subscription>,
    _frame_loop: FrameLoop,
}

impl Page {
    pub fn mount(root: &web::Element) -> Page {
        let (reveal_set, reveal_blocks) = collect_reveals(root);
        let state = Rc::new(RefCell::new(PageState {
            epoch: Instant::now(),
            cards: collect_cards(root),
            cursor: collect_cursor(root),
            nav: collect_nav(root),
            spotlights: collect_spotlights(root),
            reveal_set,
            reveal_blocks,
        }));

        let mut subscriptions = Vec::new();
        events::wire_tilt_cards(&state, &mut subscriptions);
        events::wire_cursor(&state, &mut subscriptions);
        events::wire_scroll_tracking(&state, &mut subscriptions);
        events::wire_reveal_scans(&state, &mut subscriptions);
        events::wire_spotlights(&state, &mut subscriptions);

        {
            let mut s = state.borrow_mut();
            let now = s.now();
            // the page may already be scrolled (restored position, route change)
            if let Some(nav) = s.nav.as_mut() {
                _ = nav.tracker.request_probe(now);
            }
            log::info!(
                "[page] mounted: cards={} cursor={} sections={} spotlights={} reveals={} listeners={}",
                s.cards.len(),
                s.cursor.is_some(),
                s.nav.as_ref().map_or(0, |n| n.tracker.sections().len()),
                s.spotlights.iter().map(|g| g.spotlight.len()).sum::<usize>(),
                s.reveal_set.len(),
                subscriptions.len()
            );
        }

        let frame_loop = FrameLoop::start(state.clone());
        Page {
            state,
            _subscriptions: subscriptions,
            _frame_loop: frame_loop,
        }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            if let Some(nav) = s.nav.as_mut() {
                nav.tracker.cancel();
            }
        }
        log::info!("[page] unmounted");
    }
}

fn collect_cards(root: &web::Element) -> Vec<TiltCard> {
    dom::query_all(root, TILT_SELECTOR)
        .into_iter()
        .map(|el| {
            let variant = el.get_attribute(TiltConfig::VARIANT_ATTR);
            let amplitude = el.get_attribute(TiltConfig::AMPLITUDE_ATTR);
            let scale = el.get_attribute(TiltConfig::SCALE_ATTR);
            let config =
                TiltConfig::from_attrs(variant.as_deref(), amplitude.as_deref(), scale.as_deref())
                    .unwrap_or_else(|e| {
                        log::warn!("[page] tilt card uses defaults: {}", e);
                        TiltConfig::default()
                    });
            // without a dedicated body the element itself turns
            let body = dom::query_one(&el, TILT_BODY_SELECTOR)
                .or_else(|| el.clone().dyn_into::<web::HtmlElement>().ok());
            TiltCard {
                body,
                caption: dom::query_one(&el, TILT_CAPTION_SELECTOR),
                engine: TiltEngine::new(config),
                root: el,
            }
        })
        .collect()
}

fn collect_cursor(root: &web::Element) -> Option<FollowCursor> {
    let element = dom::query_one(root, CURSOR_SELECTOR)?;
    let hover_targets = dom::query_all(root, CURSOR_KIND_SELECTOR)
        .into_iter()
        .map(|el| {
            let kind = el
                .get_attribute(CURSOR_KIND_ATTR)
                .map_or(CursorKind::Default, |raw| CursorKind::parse(&raw));
            (el, kind)
        })
        .collect();
    Some(FollowCursor {
        element,
        follower: CursorFollower::default(),
        painted_kind: None,
        painted_position: None,
        hover_targets,
    })
}

fn collect_nav(root: &web::Element) -> Option<TrackedNav> {
    let section_elements = dom::query_all(root, SECTION_SELECTOR);
    let sections: Vec<Section> = section_elements
        .iter()
        .map(|el| {
            let id = el.get_attribute(SECTION_ID_ATTR).unwrap_or_default();
            let title = el
                .get_attribute(SECTION_TITLE_ATTR)
                .unwrap_or_else(|| id.clone());
            Section::new(id, title)
        })
        .collect();
    if sections.is_empty() {
        return None;
    }
    let tracker = match ScrollTracker::new(sections, TrackerConfig::default()) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("[page] scroll tracking disabled: {}", e);
            return None;
        }
    };
    let nav_buttons = dom::query_all(root, NAV_TARGET_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let target = el.get_attribute(NAV_TARGET_ATTR)?;
            match tracker.index_of(&target) {
                Some(i) => Some((i, el)),
                None => {
                    log::warn!("[page] nav button targets unknown section {:?}", target);
                    None
                }
            }
        })
        .collect();
    Some(TrackedNav {
        tracker,
        section_elements,
        nav_buttons,
        painted_index: None,
    })
}

fn collect_spotlights(root: &web::Element) -> Vec<SpotlightGroup> {
    dom::query_all(root, SPOTLIGHT_SELECTOR)
        .into_iter()
        .map(|group| {
            let mut spotlight = Spotlight::new(SpotlightConfig::default());
            let items = dom::query_all(&group, SPOTLIGHT_ITEM_SELECTOR)
                .into_iter()
                .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
                .map(|el| (spotlight.register(), el))
                .collect();
            SpotlightGroup { spotlight, items }
        })
        .filter(|g| !g.spotlight.is_empty())
        .collect()
}

fn collect_reveals(root: &web::Element) -> (RevealSet, Vec<RevealBlock>) {
    let (reveals, blocks): (Vec<Reveal>, Vec<RevealBlock>) = dom::query_all(root, REVEAL_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| {
            let direction = el
                .get_attribute(REVEAL_DIRECTION_ATTR)
                .map_or(Some(RevealDirection::Up), |raw| RevealDirection::parse(&raw))
                .unwrap_or_else(|| {
                    log::warn!("[page] unknown reveal direction, sliding up");
                    RevealDirection::Up
                });
            let delay_sec = el
                .get_attribute(REVEAL_DELAY_ATTR)
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .filter(|d| d.is_finite() && (0.0..=60.0).contains(d))
                .unwrap_or(0.0);
            let mut reveal = Reveal::new(direction, Duration::from_secs_f64(delay_sec));
            if let Some(threshold) = el
                .get_attribute(REVEAL_THRESHOLD_ATTR)
                .and_then(|raw| raw.trim().parse::<f32>().ok())
                .filter(|t| t.is_finite())
            {
                reveal = reveal.with_threshold(threshold);
            }
            let block = RevealBlock {
                element: el,
                painted_visible: None,
            };
            (reveal, block)
        })
        .unzip();
    (RevealSet::new(reveals), blocks)
}
