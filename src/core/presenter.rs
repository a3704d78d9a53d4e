// Zone selection -> reading -> needle angle -> sound state.
//
// `ZonePresenter` owns no DOM or audio handles. Side effects leave through
// the two ports of `PresenterOutputs`, and randomness comes in through a
// `UnitSource`, so the whole mapping runs off-browser with a seeded or
// scripted source.

use super::constants::{ANGLE_DEGREES_PER_PERCENT, ANGLE_OFFSET_DEGREES, INITIAL_READING};
use super::zone::{sound_state_for, SoundState, Zone, ZoneError};
use rand::prelude::*;

/// Uniform samples in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> UnitSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// `StdRng`-backed source.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl UnitSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Percentage in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct ToxicityReading(pub f64);

/// Needle rotation in degrees, `[-90, 90]` for readings in range.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct NeedleAngle(pub f64);

impl NeedleAngle {
    pub fn degrees(self) -> f64 {
        self.0
    }
}

/// The two output ports. Neither can fail from the presenter's point of view:
/// a sound port that cannot start playback reports it on its own.
pub trait PresenterOutputs {
    fn set_angle(&mut self, angle: NeedleAngle);
    fn set_sound_state(&mut self, state: SoundState);
}

#[inline]
fn unit_in_range(u: f64) -> f64 {
    if u.is_nan() {
        0.0
    } else {
        u.clamp(0.0, 1.0)
    }
}

/// Draw a reading uniformly from the zone's range: `min + u * (max - min)`.
pub fn sample_reading<S: UnitSource + ?Sized>(zone: Zone, source: &mut S) -> ToxicityReading {
    let u = unit_in_range(source.next_unit());
    ToxicityReading(zone.range().lerp(u))
}

#[inline]
pub fn angle_for(reading: ToxicityReading) -> NeedleAngle {
    NeedleAngle(reading.0 * ANGLE_DEGREES_PER_PERCENT + ANGLE_OFFSET_DEGREES)
}

pub struct ZonePresenter<S> {
    source: S,
    reading: ToxicityReading,
    angle: NeedleAngle,
    sound_state: SoundState,
}

impl<S: UnitSource> ZonePresenter<S> {
    pub fn new(source: S) -> Self {
        let reading = ToxicityReading(INITIAL_READING);
        Self {
            source,
            reading,
            angle: angle_for(reading),
            sound_state: SoundState::Silent,
        }
    }

    /// Push the resting needle position to the display. Sound is left alone;
    /// it starts out silent.
    pub fn initialize<O: PresenterOutputs + ?Sized>(&self, outputs: &mut O) {
        log::info!(
            "[zone] initial reading={:.1} angle={:.1}",
            self.reading.0,
            self.angle.0
        );
        outputs.set_angle(self.angle);
    }

    /// Handle one selection. Calls `set_angle` then `set_sound_state`, each
    /// exactly once.
    pub fn apply_zone_selection<O: PresenterOutputs + ?Sized>(
        &mut self,
        zone: Zone,
        outputs: &mut O,
    ) {
        let reading = sample_reading(zone, &mut self.source);
        let angle = angle_for(reading);
        self.reading = reading;
        self.angle = angle;
        outputs.set_angle(angle);

        let state = sound_state_for(zone);
        log::debug!(
            "[zone] {} reading={:.2} angle={:.2} sound {:?} -> {:?}",
            zone,
            reading.0,
            angle.0,
            self.sound_state,
            state
        );
        self.sound_state = state;
        outputs.set_sound_state(state);
    }

    /// Validate a raw tag first; an invalid tag reaches neither port.
    pub fn apply_zone_tag<O: PresenterOutputs + ?Sized>(
        &mut self,
        tag: u8,
        outputs: &mut O,
    ) -> Result<Zone, ZoneError> {
        let zone = Zone::from_tag(tag)?;
        self.apply_zone_selection(zone, outputs);
        Ok(zone)
    }

    pub fn reading(&self) -> ToxicityReading {
        self.reading
    }

    pub fn angle(&self) -> NeedleAngle {
        self.angle
    }

    pub fn sound_state(&self) -> SoundState {
        self.sound_state
    }
}
