pub mod constants;
pub mod playback;
pub mod presenter;
pub mod zone;

pub use playback::*;
pub use presenter::*;
pub use zone::*;
