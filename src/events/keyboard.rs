use super::GaugeWiring;
use crate::core::Zone;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, wiring: &GaugeWiring) {
    let key = ev.key();
    if let Some(zone) = Zone::from_key(&key) {
        log::debug!("[keys] {} -> {}", key, zone);
        wiring.select(zone);
    }
}

pub fn wire_global_keydown(wiring: GaugeWiring) {
    let document = wiring.document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &wiring);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
