use crate::core::CursorKind;
use crate::dom::Subscription;
use crate::page::PageState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window mousemove drives the follow cursor; hovering a
/// `data-cursor-kind` element restyles it until the pointer leaves.
pub fn wire_cursor(state: &Rc<RefCell<PageState>>, subs: &mut Vec<Subscription>) {
    let targets: Vec<(web::EventTarget, CursorKind)> = match state.borrow().cursor.as_ref() {
        Some(cursor) => cursor
            .hover_targets
            .iter()
            .map(|(el, kind)| (el.clone().unchecked_into(), *kind))
            .collect(),
        None => return,
    };

    if let Some(window) = web::window() {
        let state_move = state.clone();
        subs.extend(Subscription::listen(
            window.unchecked_ref(),
            "mousemove",
            move |ev: web::Event| {
                let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                if let Ok(mut s) = state_move.try_borrow_mut() {
                    if let Some(cursor) = s.cursor.as_mut() {
                        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                        cursor.follower.on_pointer_move(client);
                    }
                }
            },
        ));
    }

    for (target, kind) in targets {
        let state_enter = state.clone();
        subs.extend(Subscription::listen(&target, "mouseenter", move |_ev| {
            if let Ok(mut s) = state_enter.try_borrow_mut() {
                if let Some(cursor) = s.cursor.as_mut() {
                    cursor.follower.set_kind(kind);
                }
            }
        }));
        let state_leave = state.clone();
        subs.extend(Subscription::listen(&target, "mouseleave", move |_ev| {
            if let Ok(mut s) = state_leave.try_borrow_mut() {
                if let Some(cursor) = s.cursor.as_mut() {
                    cursor.follower.reset_kind();
                }
            }
        }));
    }
}
