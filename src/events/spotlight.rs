use crate::dom::Subscription;
use crate::page::PageState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One enter/leave pair per item, all reporting to the group's shared
/// coordinator instead of touching siblings directly.
pub fn wire_spotlights(state: &Rc<RefCell<PageState>>, subs: &mut Vec<Subscription>) {
    let items: Vec<(usize, usize, web::EventTarget)> = state
        .borrow()
        .spotlights
        .iter()
        .enumerate()
        .flat_map(|(g, group)| {
            group
                .items
                .iter()
                .enumerate()
                .map(move |(i, (_, el))| (g, i, el.clone().unchecked_into()))
        })
        .collect();

    for (group, item, target) in items {
        let state_enter = state.clone();
        subs.extend(Subscription::listen(&target, "mouseenter", move |_ev| {
            if let Ok(mut s) = state_enter.try_borrow_mut() {
                if let Some(g) = s.spotlights.get_mut(group) {
                    if let Some(handle) = g.items.get(item).map(|(h, _)| *h) {
                        g.spotlight.enter(handle);
                    }
                }
            }
        }));
        let state_leave = state.clone();
        subs.extend(Subscription::listen(&target, "mouseleave", move |_ev| {
            if let Ok(mut s) = state_leave.try_borrow_mut() {
                if let Some(g) = s.spotlights.get_mut(group) {
                    if let Some(handle) = g.items.get(item).map(|(h, _)| *h) {
                        g.spotlight.leave(handle);
                    }
                }
            }
        }));
    }
}
