// Gauge tuning constants shared by the presenter and the web frontend.

// Percent bounds per zone; each zone samples from [min, max)
pub const LOW_RANGE: (f64, f64) = (0.0, 20.0);
pub const MEDIUM_RANGE: (f64, f64) = (20.0, 60.0);
pub const HIGH_RANGE: (f64, f64) = (60.0, 100.0);

// Full scale of a reading
pub const READING_MIN: f64 = 0.0;
pub const READING_MAX: f64 = 100.0;

// Needle mapping: angle = reading * SCALE + OFFSET
pub const ANGLE_DEGREES_PER_PERCENT: f64 = 1.8; // 180 degrees of sweep over 100%
pub const ANGLE_OFFSET_DEGREES: f64 = -90.0; // 0% points hard left
pub const ANGLE_MIN: f64 = -90.0;
pub const ANGLE_MAX: f64 = 90.0;

// Needle rests here before the first selection (middle of the medium band)
pub const INITIAL_READING: f64 = 40.0;

// Ambient loops
pub const LOOP_VOLUME: f64 = 0.7;

// Zone tags as used by buttons (`data-zone`) and the keyboard
pub const ZONE_TAG_LOW: u8 = 1;
pub const ZONE_TAG_MEDIUM: u8 = 2;
pub const ZONE_TAG_HIGH: u8 = 3;
