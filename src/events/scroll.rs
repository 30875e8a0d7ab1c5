use crate::constants::NAV_TARGET_ATTR;
use crate::dom::{self, Subscription};
use crate::page::{PageState, TrackedNav};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window scroll feeds the tracker's throttle; nav button clicks start a
/// programmatic navigation. The probe itself runs from the frame loop.
pub fn wire_scroll_tracking(state: &Rc<RefCell<PageState>>, subs: &mut Vec<Subscription>) {
    let buttons: Vec<(String, web::EventTarget)> = match state.borrow().nav.as_ref() {
        Some(nav) => nav
            .nav_buttons
            .iter()
            .filter_map(|(_, el)| {
                let id = el.get_attribute(NAV_TARGET_ATTR)?;
                Some((id, el.clone().unchecked_into()))
            })
            .collect(),
        None => return,
    };

    if let Some(window) = web::window() {
        let state_scroll = state.clone();
        subs.extend(Subscription::listen(
            window.unchecked_ref(),
            "scroll",
            move |_ev: web::Event| {
                let Ok(mut s) = state_scroll.try_borrow_mut() else {
                    return;
                };
                let now = s.now();
                if let Some(nav) = s.nav.as_mut() {
                    _ = nav.tracker.on_scroll(now);
                }
            },
        ));
    }

    for (id, target) in buttons {
        let state_click = state.clone();
        subs.extend(Subscription::listen(&target, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Ok(mut s) = state_click.try_borrow_mut() else {
                return;
            };
            let now = s.now();
            let Some(TrackedNav {
                tracker,
                section_elements,
                ..
            }) = s.nav.as_mut()
            else {
                return;
            };
            let measure = |i: usize| section_elements.get(i).and_then(dom::section_bounds);
            if let Some(req) = tracker.navigate_to_id(&id, measure, now) {
                dom::smooth_scroll_to(req.top);
            }
        }));
    }
}

/// Scroll and resize mark reveal blocks for measuring on the next frame.
pub fn wire_reveal_scans(state: &Rc<RefCell<PageState>>, subs: &mut Vec<Subscription>) {
    if state.borrow().reveal_set.is_empty() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    for event in ["scroll", "resize"] {
        let state = state.clone();
        subs.extend(Subscription::listen(
            window.unchecked_ref(),
            event,
            move |_ev: web::Event| {
                if let Ok(mut s) = state.try_borrow_mut() {
                    s.reveal_set.request_scan();
                }
            },
        ));
    }
}
