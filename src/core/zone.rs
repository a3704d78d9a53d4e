// Zones, their percent ranges and the ambient sound bound to each.
//
// Everything here is plain data with total lookups; the only fallible path is
// turning an external tag (button attribute, raw number) into a `Zone`.

use super::constants::{
    HIGH_RANGE, LOW_RANGE, MEDIUM_RANGE, ZONE_TAG_HIGH, ZONE_TAG_LOW, ZONE_TAG_MEDIUM,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    #[error("invalid zone tag {0} (expected 1, 2 or 3)")]
    InvalidZone(u8),
    #[error("invalid zone attribute {0:?}")]
    InvalidAttribute(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Low,
    Medium,
    High,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Low, Zone::Medium, Zone::High];

    pub fn from_tag(tag: u8) -> Result<Self, ZoneError> {
        match tag {
            ZONE_TAG_LOW => Ok(Zone::Low),
            ZONE_TAG_MEDIUM => Ok(Zone::Medium),
            ZONE_TAG_HIGH => Ok(Zone::High),
            other => Err(ZoneError::InvalidZone(other)),
        }
    }


    /// Keyboard binding; keys other than "1", "2", "3" are not zone keys.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Zone::Low),
            "2" => Some(Zone::Medium),
            "3" => Some(Zone::High),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Zone::Low => ZONE_TAG_LOW,
            Zone::Medium => ZONE_TAG_MEDIUM,
            Zone::High => ZONE_TAG_HIGH,
        }
    }

    /// CSS selector for this zone's button, e.g. `[data-zone="2"]`.
    pub fn button_selector(self, attribute: &str) -> String {
        format!("[{}=\"{}\"]", attribute, self.tag())
    }

    pub fn range(self) -> PercentRange {
        let (min, max) = match self {
            Zone::Low => LOW_RANGE,
            Zone::Medium => MEDIUM_RANGE,
            Zone::High => HIGH_RANGE,
        };
        PercentRange { min, max }
    }

    pub fn sound_state(self) -> SoundState {
        sound_state_for(self)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Zone::Low => "low",
            Zone::Medium => "medium",
            Zone::High => "high",
        };
        f.write_str(name)
    }
}

/// Read the raw tag from a button's `data-zone` attribute. Surrounding
/// whitespace is allowed; whether the tag names a zone is checked later by
/// `Zone::from_tag`.
pub fn parse_zone_attr(attr: &str) -> Result<u8, ZoneError> {
    attr.trim()
        .parse::<u8>()
        .map_err(|_| ZoneError::InvalidAttribute(attr.to_string()))
}

/// Half-open percent interval `[min, max)` a zone samples from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentRange {
    pub min: f64,
    pub max: f64,
}

impl PercentRange {
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    /// Map a unit sample `u` in `[0, 1)` into the range.
    pub fn lerp(&self, u: f64) -> f64 {
        let value = self.min + u * self.span();
        // rounding can land exactly on `max` for u close to 1
        if value >= self.max && self.max > self.min {
            f64::from_bits(self.max.to_bits() - 1)
        } else {
            value
        }
    }
}

/// Which ambient loop is audible. Exactly one state is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SoundState {
    #[default]
    Silent,
    MediumLoop,
    HighLoop,
}

impl SoundState {
    pub fn is_looping(self) -> bool {
        !matches!(self, SoundState::Silent)
    }
}

#[inline]
pub fn sound_state_for(zone: Zone) -> SoundState {
    match zone {
        Zone::Low => SoundState::Silent,
        Zone::Medium => SoundState::MediumLoop,
        Zone::High => SoundState::HighLoop,
    }
}
