use super::GaugeWiring;
use crate::config::PageConfig;
use crate::core::parse_zone_attr;
use crate::dom;

/// Attach a click handler to every zone button. Each click re-reads the
/// button's zone attribute; a bad attribute is logged and the click ignored.
pub fn wire_zone_buttons(config: &PageConfig, wiring: &GaugeWiring) {
    let buttons = dom::html_elements(&wiring.document, config.button_selector);
    if buttons.is_empty() {
        log::warn!("[buttons] no elements match {}", config.button_selector);
    }
    for button in buttons {
        let wiring = wiring.clone();
        let target = button.clone();
        dom::add_click_listener(&button, move || {
            let attr = target
                .get_attribute(wiring.zone_attribute)
                .unwrap_or_default();
            match parse_zone_attr(&attr).and_then(|tag| wiring.select_tag(tag)) {
                Ok(zone) => log::debug!("[buttons] {}", zone),
                Err(e) => log::warn!("[buttons] ignoring click: {}", e),
            }
        });
    }
}
