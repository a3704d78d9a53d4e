pub mod buttons;
pub mod keyboard;

pub use buttons::wire_zone_buttons;
pub use keyboard::wire_global_keydown;

use crate::core::{SeededSource, Zone, ZoneError, ZonePresenter};
use crate::dom;
use crate::outputs::PageOutputs;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles every zone trigger needs.
#[derive(Clone)]
pub struct GaugeWiring {
    pub presenter: Rc<RefCell<ZonePresenter<SeededSource>>>,
    pub outputs: Rc<RefCell<PageOutputs>>,
    pub document: web::Document,
    pub zone_attribute: &'static str,
}

impl GaugeWiring {
    /// Keyboard path: the zone is already known to be valid.
    pub fn select(&self, zone: Zone) {
        {
            let mut outputs = self.outputs.borrow_mut();
            self.presenter
                .borrow_mut()
                .apply_zone_selection(zone, &mut *outputs);
        }
        self.press_feedback(zone);
    }

    /// Button path: the raw tag is validated by the presenter before any
    /// side effect.
    pub fn select_tag(&self, tag: u8) -> Result<Zone, ZoneError> {
        let zone = {
            let mut outputs = self.outputs.borrow_mut();
            self.presenter
                .borrow_mut()
                .apply_zone_tag(tag, &mut *outputs)?
        };
        self.press_feedback(zone);
        Ok(zone)
    }

    // Squeeze the zone's button whichever way the zone was picked.
    fn press_feedback(&self, zone: Zone) {
        let selector = zone.button_selector(self.zone_attribute);
        match dom::html_element(&self.document, &selector) {
            Some(button) => dom::press_feedback(&button),
            None => log::debug!("[buttons] no button for {}", selector),
        }
    }
}
