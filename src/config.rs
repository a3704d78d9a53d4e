use crate::constants::{
    HIGH_LOOP_SRC, MEDIUM_LOOP_SRC, NEEDLE_ELEMENT_ID, ZONE_ATTRIBUTE, ZONE_BUTTON_SELECTOR,
};
use crate::core::constants::LOOP_VOLUME;

/// Startup configuration for the page frontend.
#[derive(Clone, Debug)]
pub struct PageConfig {
    pub needle_id: &'static str,
    pub button_selector: &'static str,
    pub zone_attribute: &'static str,
    pub medium_loop_src: &'static str,
    pub high_loop_src: &'static str,
    pub loop_volume: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            needle_id: NEEDLE_ELEMENT_ID,
            button_selector: ZONE_BUTTON_SELECTOR,
            zone_attribute: ZONE_ATTRIBUTE,
            medium_loop_src: MEDIUM_LOOP_SRC,
            high_loop_src: HIGH_LOOP_SRC,
            loop_volume: LOOP_VOLUME,
        }
    }
}
