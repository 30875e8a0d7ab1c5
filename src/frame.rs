use crate::constants::{MAX_FRAME_DT_SEC, NAV_ACTIVE_CLASS, REVEAL_TRANSITION};
use crate::core::{visible_fraction, SectionBounds};
use crate::dom;
use crate::page::PageState;
use crate::paint;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

impl PageState {
    /// One cooperative tick. Layout reads all happen before any style
    /// write so a frame never forces a synchronous reflow.
    pub fn frame(&mut self, dt_sec: f32) {
        let now = self.now();
        self.measure(now);
        self.paint(dt_sec, now);
    }

    fn measure(&mut self, now: Duration) {
        if let Some(nav) = self.nav.as_mut() {
            if nav.tracker.expire(now) {
                log::debug!("[frame] scroll navigation finished");
            }
            if nav.tracker.probe_due(now) {
                let bounds: Vec<Option<SectionBounds>> = nav
                    .section_elements
                    .iter()
                    .map(dom::section_bounds)
                    .collect();
                _ = nav.tracker.probe(dom::scroll_y(), &bounds, now);
            }
        }

        let pending = self.reveal_set.take_scan();
        if !pending.is_empty() {
            let viewport_h = dom::viewport_height();
            for i in pending {
                let fraction = self
                    .reveal_blocks
                    .get(i)
                    .and_then(|b| dom::element_rect(&b.element))
                    .map_or(0.0, |r| visible_fraction(r, viewport_h));
                self.reveal_set.observe(i, fraction, now);
            }
        }
    }

    fn paint(&mut self, dt_sec: f32, now: Duration) {
        for card in &mut self.cards {
            let was_settled = card.engine.is_settled();
            card.engine.step(dt_sec);
            if was_settled {
                continue;
            }
            let f = card.engine.frame();
            if let Some(body) = &card.body {
                paint::tilt_body(body, &f);
            }
            if let Some(caption) = &card.caption {
                paint::tilt_caption(caption, &f);
            }
        }

        if let Some(cursor) = self.cursor.as_mut() {
            let kind = cursor.follower.kind();
            if cursor.painted_kind != Some(kind) {
                paint::cursor_style(&cursor.element, &cursor.follower.style());
                cursor.painted_kind = Some(kind);
            }
            if !cursor.follower.is_settled() {
                cursor.follower.step(dt_sec);
            }
            // the first sample jumps straight to the pointer without animating
            let position = cursor.follower.position();
            if cursor.follower.is_tracking() && cursor.painted_position != Some(position) {
                paint::cursor_position(&cursor.element, position);
                cursor.painted_position = Some(position);
            }
        }

        if let Some(nav) = self.nav.as_mut() {
            let snapshot = nav.tracker.frame(now);
            if nav.painted_index != Some(snapshot.active_index) {
                paint::active_nav(&nav.nav_buttons, snapshot.active_index, NAV_ACTIVE_CLASS);
                nav.painted_index = Some(snapshot.active_index);
                log::debug!(
                    "[frame] nav highlights {:?} (navigating: {})",
                    nav.tracker.active_section().title,
                    snapshot.is_navigating
                );
            }
        }

        for group in &mut self.spotlights {
            if group.spotlight.is_settled() {
                continue;
            }
            group.spotlight.step(dt_sec);
            for (item, el) in &group.items {
                if let Some(o) = group.spotlight.opacity(*item) {
                    paint::opacity(el, o);
                }
            }
        }

        for (i, block) in self.reveal_blocks.iter_mut().enumerate() {
            let Some(reveal) = self.reveal_set.get(i) else {
                continue;
            };
            let visible = reveal.is_visible(now);
            if block.painted_visible != Some(visible) {
                paint::reveal(&block.element, &reveal.style(now), REVEAL_TRANSITION);
                block.painted_visible = Some(visible);
            }
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop over a page. Dropping the handle cancels the
/// pending frame and breaks the callback's self-reference.
pub struct FrameLoop {
    tick: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(state: Rc<RefCell<PageState>>) -> FrameLoop {
        let tick: FrameCallback = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        let mut last = Instant::now();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now = Instant::now();
            let dt_sec = (now - last).as_secs_f32().min(MAX_FRAME_DT_SEC);
            last = now;
            if let Ok(mut s) = state.try_borrow_mut() {
                s.frame(dt_sec);
            }
            handle_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));

        handle.set(request_frame(&tick));
        FrameLoop { tick, handle }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(h), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(h);
        }
        if let Ok(mut t) = self.tick.try_borrow_mut() {
            t.take();
        }
    }
}

fn request_frame(tick: &FrameCallback) -> Option<i32> {
    let w = web::window()?;
    let cb = tick.borrow();
    let cb = cb.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
