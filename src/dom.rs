use crate::core::{Rect, SectionBounds};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that is removed from its target when dropped.
pub struct Subscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Subscription {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] could not listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Current viewport rect, or `None` once the element left the document.
pub fn element_rect(el: &web::Element) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    ))
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Document-relative vertical bounds of a connected element.
pub fn section_bounds(el: &web::Element) -> Option<SectionBounds> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(SectionBounds::from_viewport(r.top(), r.height(), scroll_y()))
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}
