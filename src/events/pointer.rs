use crate::dom::{self, Subscription};
use crate::page::PageState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hooks pointer enter/move/leave on every tilt card.
pub fn wire_tilt_cards(state: &Rc<RefCell<PageState>>, subs: &mut Vec<Subscription>) {
    let roots: Vec<web::EventTarget> = state
        .borrow()
        .cards
        .iter()
        .map(|c| c.root.clone().unchecked_into())
        .collect();

    for (i, target) in roots.iter().enumerate() {
        subs.extend(wire_pointermove(state, target, i));
        subs.extend(wire_pointerenter(state, target, i));
        subs.extend(wire_pointerleave(state, target, i));
    }
}

fn wire_pointermove(
    state: &Rc<RefCell<PageState>>,
    target: &web::EventTarget,
    card: usize,
) -> Option<Subscription> {
    let state = state.clone();
    Subscription::listen(target, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Ok(mut s) = state.try_borrow_mut() else {
            return;
        };
        let Some(c) = s.cards.get_mut(card) else {
            return;
        };
        // mounted under the pointer, so no enter was ever seen
        if !c.engine.is_hovered() {
            c.engine.on_pointer_enter();
        }
        let bounds = dom::element_rect(&c.root);
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        c.engine.on_pointer_move(client, bounds);
    })
}

fn wire_pointerenter(
    state: &Rc<RefCell<PageState>>,
    target: &web::EventTarget,
    card: usize,
) -> Option<Subscription> {
    let state = state.clone();
    Subscription::listen(target, "pointerenter", move |_ev: web::Event| {
        if let Ok(mut s) = state.try_borrow_mut() {
            if let Some(c) = s.cards.get_mut(card) {
                c.engine.on_pointer_enter();
            }
        }
    })
}

fn wire_pointerleave(
    state: &Rc<RefCell<PageState>>,
    target: &web::EventTarget,
    card: usize,
) -> Option<Subscription> {
    let state = state.clone();
    Subscription::listen(target, "pointerleave", move |_ev: web::Event| {
        if let Ok(mut s) = state.try_borrow_mut() {
            if let Some(c) = s.cards.get_mut(card) {
                c.engine.on_pointer_leave();
            }
        }
    })
}
