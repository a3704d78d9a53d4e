// Page wiring constants for the web frontend.
//
// Element ids, selectors and asset paths match the host page markup; the
// press-feedback values reproduce the small squeeze a zone button gets when
// its zone is selected by click or key.
// Needle element rotated by `set_angle`
pub const NEEDLE_ELEMENT_ID: &str = "needle";

// Zone buttons carry their tag in `data-zone`
pub const ZONE_BUTTON_SELECTOR: &str = ".btn";
pub const ZONE_ATTRIBUTE: &str = "data-zone";

// Ambient loop assets, relative to the page
pub const MEDIUM_LOOP_SRC: &str = "sounds/med-rad.mp3";
pub const HIGH_LOOP_SRC: &str = "sounds/high-rad.mp3";

// Button press feedback
pub const PRESS_SCALE: f32 = 0.95;
pub const PRESS_FEEDBACK_MS: i32 = 100;
