use crate::core::{CursorStyle, RevealStyle, TiltFrame};
use glam::Vec2;
use web_sys as web;

#[inline]
fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn tilt_body(el: &web::HtmlElement, f: &TiltFrame) {
    set_style(
        el,
        "transform",
        &format!(
            "rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
            f.rotation_x, f.rotation_y, f.scale
        ),
    );
}

pub fn tilt_caption(el: &web::HtmlElement, f: &TiltFrame) {
    set_style(
        el,
        "transform",
        &format!(
            "translate({:.1}px, {:.1}px) rotate({:.3}deg)",
            f.cursor_local.x, f.cursor_local.y, f.caption_rotation
        ),
    );
    set_style(el, "opacity", &format!("{:.3}", f.tooltip_opacity));
}

/// Centres the cursor element on `at` (viewport px).
pub fn cursor_position(el: &web::HtmlElement, at: Vec2) {
    set_style(
        el,
        "transform",
        &format!("translate({:.1}px, {:.1}px) translate(-50%, -50%)", at.x, at.y),
    );
}

pub fn cursor_style(el: &web::HtmlElement, style: &CursorStyle) {
    let size = format!("{:.0}px", style.size_px);
    set_style(el, "width", &size);
    set_style(el, "height", &size);
    set_style(el, "opacity", &format!("{:.2}", style.opacity));
    set_style(el, "border-width", &format!("{:.0}px", style.border_px));
}

#[inline]
pub fn opacity(el: &web::HtmlElement, value: f32) {
    set_style(el, "opacity", &format!("{:.3}", value));
}

pub fn reveal(el: &web::HtmlElement, style: &RevealStyle, transition: &str) {
    set_style(el, "transition", transition);
    set_style(el, "opacity", &format!("{:.3}", style.opacity));
    set_style(
        el,
        "transform",
        &format!("translate({:.1}px, {:.1}px)", style.offset.x, style.offset.y),
    );
}

/// Moves the active class to the buttons of section `active`.
pub fn active_nav(buttons: &[(usize, web::Element)], active: usize, class: &str) {
    for (i, el) in buttons {
        let cl = el.class_list();
        if *i == active {
            _ = cl.add_1(class);
        } else {
            _ = cl.remove_1(class);
        }
    }
}
