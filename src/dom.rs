use crate::constants::{PRESS_FEEDBACK_MS, PRESS_SCALE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element_by_id(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", element_id, e))
}

/// All elements matching `selector`, skipping anything that isn't an HtmlElement.
pub fn html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::error!("query {} failed: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// First element matching `selector`, if it is an HtmlElement.
pub fn html_element(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_rotation_degrees(el: &web::HtmlElement, degrees: f64) {
    let transform = format!("rotate({}deg)", degrees);
    if let Err(e) = el.style().set_property("transform", &transform) {
        log::error!("set transform failed: {:?}", e);
    }
}

#[inline]
pub fn add_click_listener(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Squeeze a button briefly, then restore its transform.
pub fn press_feedback(button: &web::HtmlElement) {
    let style = button.style();
    _ = style.set_property("transform", &format!("scale({})", PRESS_SCALE));
    let Some(window) = web::window() else {
        _ = style.set_property("transform", "");
        return;
    };
    let restore = Closure::once_into_js(move || {
        _ = style.set_property("transform", "");
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        restore.unchecked_ref(),
        PRESS_FEEDBACK_MS,
    ) {
        log::error!("press feedback timer failed: {:?}", e);
    }
}
