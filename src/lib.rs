#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod page;
mod paint;

use page::Page;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-motion starting");

    if let Err(e) = mount_document() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

/// Scans the document and wires every interactive element. Called again
/// after client-side navigation swaps the page content; the previous page
/// is torn down first.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_document().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Releases every listener and stops the frame loop.
#[wasm_bindgen]
pub fn unmount() {
    let previous = PAGE.with(|p| p.borrow_mut().take());
    drop(previous);
}

fn mount_document() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root: web::Element = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("document has no root element"))?;

    unmount();
    let page = Page::mount(&root);
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}
