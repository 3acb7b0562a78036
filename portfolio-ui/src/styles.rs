#![cfg(target_arch = "wasm32")]

use portfolio_core::styles::{STYLE_MARKER_ATTR, TIMELINE_ITEM_STYLES};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node, ShadowRoot};

const STYLE_TAG_SELECTOR: &str = "style[data-timeline-item]";

/// Inject the component style sheet into `root` unless it is already there.
pub fn ensure_styles(document: &Document, root: &ShadowRoot) -> Result<(), JsValue> {
    if root.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let style_el = document.create_element("style")?;
    style_el.set_attribute(STYLE_MARKER_ATTR, "")?;
    style_el.set_text_content(Some(TIMELINE_ITEM_STYLES));
    root.append_child(&style_el.dyn_into::<Node>()?)?;

    Ok(())
}
