// Host-side tests for the zone presenter: sampling, angle mapping and the
// ordering of output-port calls.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod zone {
    include!("../src/core/zone.rs");
}
mod presenter {
    include!("../src/core/presenter.rs");
}

use presenter::*;
use zone::*;

#[derive(Clone, Debug, PartialEq)]
enum PortCall {
    Angle(f64),
    Sound(SoundState),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<PortCall>,
}

impl Recorder {
    fn angles(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PortCall::Angle(a) => Some(*a),
                _ => None,
            })
            .collect()
    }

    fn sounds(&self) -> Vec<SoundState> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PortCall::Sound(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl PresenterOutputs for Recorder {
    fn set_angle(&mut self, angle: NeedleAngle) {
        self.calls.push(PortCall::Angle(angle.degrees()));
    }
    fn set_sound_state(&mut self, state: SoundState) {
        self.calls.push(PortCall::Sound(state));
    }
}

// Sound port that "fails" on every loop request, the way a blocked autoplay
// would; it can only swallow the failure.
#[derive(Default)]
struct RejectingSound {
    angle: Option<f64>,
    rejected: usize,
}

impl PresenterOutputs for RejectingSound {
    fn set_angle(&mut self, angle: NeedleAngle) {
        self.angle = Some(angle.degrees());
    }
    fn set_sound_state(&mut self, state: SoundState) {
        if state.is_looping() {
            self.rejected += 1;
        }
    }
}

fn scripted(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut it = values.into_iter();
    move || it.next().unwrap_or(0.0)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn angle_for_fixed_points() {
    assert!(approx(angle_for(ToxicityReading(0.0)).degrees(), -90.0));
    assert!(approx(angle_for(ToxicityReading(50.0)).degrees(), 0.0));
    assert!(approx(angle_for(ToxicityReading(100.0)).degrees(), 90.0));
    assert!(approx(angle_for(ToxicityReading(40.0)).degrees(), -18.0));
}

#[test]
fn angle_for_is_monotonic_over_full_scale() {
    let mut prev = angle_for(ToxicityReading(0.0)).degrees();
    for i in 1..=1000 {
        let a = angle_for(ToxicityReading(i as f64 * 0.1)).degrees();
        assert!(a > prev, "angle not increasing at reading {}", i as f64 * 0.1);
        prev = a;
    }
}

#[test]
fn sampled_readings_stay_in_zone_for_many_seeds() {
    for seed in 0..200u64 {
        let mut source = SeededSource::from_seed(seed);
        for zone in Zone::ALL {
            let range = zone.range();
            for _ in 0..25 {
                let r = sample_reading(zone, &mut source);
                assert!(
                    range.contains(r.0),
                    "seed {seed}: {zone} reading {} outside [{}, {})",
                    r.0,
                    range.min,
                    range.max
                );
                let a = angle_for(r).degrees();
                assert!((-90.0..=90.0).contains(&a), "angle {a} out of sweep");
            }
        }
    }
}

#[test]
fn sample_reading_uses_linear_formula() {
    let mut source = scripted(vec![0.0, 0.25, 0.5]);
    assert!(approx(sample_reading(Zone::High, &mut source).0, 60.0));
    assert!(approx(sample_reading(Zone::High, &mut source).0, 70.0));
    assert!(approx(sample_reading(Zone::Low, &mut source).0, 10.0));
}

#[test]
fn misbehaving_source_cannot_escape_zone() {
    let mut source = scripted(vec![1.0, 1.5, -0.5, f64::NAN, f64::INFINITY]);
    for _ in 0..5 {
        let r = sample_reading(Zone::Medium, &mut source);
        assert!(Zone::Medium.range().contains(r.0), "reading {} escaped", r.0);
    }
}

#[test]
fn seeded_sources_are_deterministic() {
    let mut a = SeededSource::from_seed(7);
    let mut b = SeededSource::from_seed(7);
    for _ in 0..20 {
        let u = a.next_unit();
        assert_eq!(u, b.next_unit());
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn initial_state_is_silent_at_minus_eighteen_degrees() {
    let presenter = ZonePresenter::new(SeededSource::from_seed(1));
    assert!(approx(presenter.reading().0, 40.0));
    assert!(approx(presenter.angle().degrees(), -18.0));
    assert_eq!(presenter.sound_state(), SoundState::Silent);

    let mut rec = Recorder::default();
    presenter.initialize(&mut rec);
    assert_eq!(rec.calls.len(), 1);
    assert!(approx(rec.angles()[0], -18.0));
    assert!(rec.sounds().is_empty());
}

#[test]
fn each_selection_sets_angle_then_sound_exactly_once() {
    let mut presenter = ZonePresenter::new(SeededSource::from_seed(3));
    let mut rec = Recorder::default();
    for (i, zone) in [Zone::Medium, Zone::Low, Zone::High, Zone::High]
        .into_iter()
        .enumerate()
    {
        presenter.apply_zone_selection(zone, &mut rec);
        assert_eq!(rec.calls.len(), (i + 1) * 2);
        assert!(matches!(rec.calls[i * 2], PortCall::Angle(_)));
        assert_eq!(rec.calls[i * 2 + 1], PortCall::Sound(zone.sound_state()));
    }
}

#[test]
fn high_twice_stays_on_high_loop() {
    let mut presenter = ZonePresenter::new(SeededSource::from_seed(11));
    let mut rec = Recorder::default();
    presenter.apply_zone_selection(Zone::High, &mut rec);
    presenter.apply_zone_selection(Zone::High, &mut rec);

    assert_eq!(rec.sounds(), vec![SoundState::HighLoop, SoundState::HighLoop]);
    assert!(!rec.sounds().contains(&SoundState::MediumLoop));
    let angles = rec.angles();
    assert_eq!(angles.len(), 2);
    for a in &angles {
        // readings in [60, 100) map to [18, 90)
        assert!(*a >= 18.0 - 1e-9 && *a < 90.0, "angle {a}");
    }
    // independently sampled
    assert_ne!(angles[0], angles[1]);
}

#[test]
fn low_after_high_silences_until_next_loop_zone() {
    let mut presenter = ZonePresenter::new(SeededSource::from_seed(5));
    let mut rec = Recorder::default();
    presenter.apply_zone_selection(Zone::High, &mut rec);
    presenter.apply_zone_selection(Zone::Low, &mut rec);
    assert_eq!(presenter.sound_state(), SoundState::Silent);
    assert_eq!(rec.sounds().last(), Some(&SoundState::Silent));

    presenter.apply_zone_selection(Zone::Low, &mut rec);
    presenter.apply_zone_selection(Zone::Low, &mut rec);
    assert_eq!(&rec.sounds()[1..], &[SoundState::Silent; 3]);

    presenter.apply_zone_selection(Zone::Medium, &mut rec);
    assert_eq!(rec.sounds().last(), Some(&SoundState::MediumLoop));
    assert_eq!(presenter.sound_state(), SoundState::MediumLoop);
}

#[test]
fn presenter_tracks_latest_selection() {
    let mut presenter = ZonePresenter::new(scripted(vec![0.5, 0.5]));
    let mut rec = Recorder::default();
    presenter.apply_zone_selection(Zone::Low, &mut rec);
    assert!(approx(presenter.reading().0, 10.0));
    assert!(approx(presenter.angle().degrees(), -72.0));
    presenter.apply_zone_selection(Zone::High, &mut rec);
    assert!(approx(presenter.reading().0, 80.0));
    assert!(approx(presenter.angle().degrees(), 54.0));
    assert_eq!(presenter.sound_state(), SoundState::HighLoop);
}

#[test]
fn invalid_tag_reaches_no_port_and_keeps_state() {
    let mut presenter = ZonePresenter::new(SeededSource::from_seed(9));
    let mut rec = Recorder::default();
    assert_eq!(
        presenter.apply_zone_tag(0, &mut rec),
        Err(ZoneError::InvalidZone(0))
    );
    assert_eq!(
        presenter.apply_zone_tag(4, &mut rec),
        Err(ZoneError::InvalidZone(4))
    );
    assert!(rec.calls.is_empty());
    assert!(approx(presenter.angle().degrees(), -18.0));
    assert_eq!(presenter.sound_state(), SoundState::Silent);

    assert_eq!(presenter.apply_zone_tag(2, &mut rec), Ok(Zone::Medium));
    assert_eq!(rec.calls.len(), 2);
}

#[test]
fn rejected_playback_leaves_angle_applied() {
    let mut presenter = ZonePresenter::new(scripted(vec![0.0]));
    let mut outputs = RejectingSound::default();
    presenter.apply_zone_selection(Zone::High, &mut outputs);
    assert_eq!(outputs.rejected, 1);
    assert!(approx(outputs.angle.unwrap_or(f64::NAN), 18.0));
    assert_eq!(presenter.sound_state(), SoundState::HighLoop);
}

#[test]
fn presenter_works_through_trait_objects() {
    let mut presenter = ZonePresenter::new(SeededSource::from_seed(2));
    let mut rec = Recorder::default();
    {
        let outputs: &mut dyn PresenterOutputs = &mut rec;
        presenter.apply_zone_selection(Zone::Medium, outputs);
    }
    assert_eq!(rec.sounds(), vec![SoundState::MediumLoop]);
    let a = rec.angles()[0];
    assert!((-54.0 - 1e-9..18.0).contains(&a));
}

#[test]
fn button_attribute_flows_through_tag_validation() {
    let mut presenter = ZonePresenter::new(scripted(vec![0.5]));
    let mut rec = Recorder::default();

    let bad = parse_zone_attr("5").and_then(|tag| presenter.apply_zone_tag(tag, &mut rec));
    assert_eq!(bad, Err(ZoneError::InvalidZone(5)));
    let bad = parse_zone_attr("x").and_then(|tag| presenter.apply_zone_tag(tag, &mut rec));
    assert!(matches!(bad, Err(ZoneError::InvalidAttribute(_))));
    assert!(rec.calls.is_empty());

    let ok = parse_zone_attr("3").and_then(|tag| presenter.apply_zone_tag(tag, &mut rec));
    assert_eq!(ok, Ok(Zone::High));
    assert_eq!(rec.calls.len(), 2);
    assert!(approx(rec.angles()[0], 54.0));
    assert_eq!(rec.sounds(), vec![SoundState::HighLoop]);
}
