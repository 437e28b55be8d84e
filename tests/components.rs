//! Tests for the individual generators.

use duodrum::envelope::{decay_period_ms, DecayEnvelope};
use duodrum::noise::SampleHoldNoise;
use duodrum::oscillator::{PhaseOscillator, Waveform};
use duodrum::params::MAX_PARAM;
use duodrum::utils::proportion;
use duodrum::voice::bass_frequency_millihz;
use duodrum::TickRate;

#[test]
fn proportion_truncates() {
    // Timing code depends on floor division; 2/3 of 100 must not round up.
    assert_eq!(proportion(2, 3, 100), 66);
    assert_eq!(proportion(1, 63, 900), 14);
    assert_eq!(proportion(63, 63, 900), 900);
    assert_eq!(proportion(0, 63, 900), 0);
}

#[test]
fn proportion_handles_wide_operands() {
    assert_eq!(proportion(7680, 7680, -4608), -4608);
    assert_eq!(proportion(3840, 7680, -4608), -2304);
    assert_eq!(proportion(30000, 30000, 30000), 30000);
}

#[test]
fn bass_frequency_is_monotonic_in_tone() {
    let mut previous = bass_frequency_millihz(0);
    assert_eq!(previous, 3000);
    for tone in 1..=MAX_PARAM {
        let frequency = bass_frequency_millihz(tone);
        assert!(frequency >= previous, "tone {tone} lowered the frequency");
        previous = frequency;
    }
    assert_eq!(previous, 6000);
}

#[test]
fn decay_period_is_monotonic_in_decay() {
    let mut previous = decay_period_ms(0);
    assert_eq!(previous, 1000);
    for decay in 1..=MAX_PARAM {
        let period = decay_period_ms(decay);
        assert!(period <= previous, "decay {decay} lengthened the period");
        previous = period;
    }
    assert_eq!(previous, 100);
}

#[test]
fn triangle_spans_full_swing() {
    let mut osc = PhaseOscillator::new(Waveform::Triangle);
    osc.init(TickRate::new(1000));
    osc.set_scale(100);
    // 250 Hz at 1000 ticks/s advances a quarter cycle per tick.
    osc.set_frequency_millihz(250_000);

    assert_eq!(osc.next(), -100);
    assert_eq!(osc.next(), 0);
    assert_eq!(osc.next(), 100);
    assert_eq!(osc.next(), 0);
    assert_eq!(osc.next(), -100);
}

#[test]
fn one_shot_ramp_falls_once_and_stops() {
    let mut osc = PhaseOscillator::new(Waveform::Ramp);
    osc.init(TickRate::new(1000));
    osc.set_one_shot(true);
    osc.set_scale(100);
    osc.set_frequency_millihz(250_000);

    // Idle until started.
    assert!(osc.eoc());

    osc.start();
    assert_eq!(osc.next(), 100);
    assert_eq!(osc.next(), 75);
    assert_eq!(osc.next(), 50);
    assert_eq!(osc.next(), 25);
    assert!(osc.eoc());
}

#[test]
fn envelope_duration_follows_decay_period() {
    let mut envelope = DecayEnvelope::new();
    envelope.init(TickRate::new(1000), 1000);
    // Fastest decay: 100 ms, i.e. about 100 ticks at 1000 ticks/s.
    envelope.set_decay(MAX_PARAM);

    envelope.trigger();
    assert!(!envelope.finished());

    let mut reads = 0;
    let mut last = envelope.peak();
    while !envelope.finished() {
        let level = envelope.next();
        assert!(level <= last, "level rose mid-decay");
        assert!(level >= 0);
        last = level;
        reads += 1;
        assert!(reads < 200, "envelope never finished");
    }
    assert!((99..=102).contains(&reads), "decay took {reads} ticks");
    assert!(last <= 10, "envelope finished far from zero: {last}");

    // The cached level freezes at its final value after the end of the cycle.
    let frozen = envelope.level();
    assert_eq!(envelope.level(), frozen);
    assert!(envelope.finished());
}

#[test]
fn envelope_first_read_after_trigger_is_peak() {
    let mut envelope = DecayEnvelope::new();
    envelope.init(TickRate::new(1000), 7680);
    envelope.set_decay(40);

    envelope.trigger();
    assert_eq!(envelope.next(), 7680);

    // Retrigger mid-decay resets to the peak on the very next read.
    for _ in 0..30 {
        envelope.next();
    }
    assert!(envelope.level() < 7680);
    envelope.trigger();
    assert_eq!(envelope.next(), 7680);
}

#[test]
fn envelope_peak_rescales_in_flight() {
    let mut envelope = DecayEnvelope::new();
    envelope.init(TickRate::new(1000), 1000);
    envelope.set_decay(MAX_PARAM);

    envelope.trigger();
    envelope.next();
    envelope.set_peak(500);
    assert!(envelope.next() <= 500);
    assert!(!envelope.finished());
}

#[test]
fn noise_holds_value_between_regenerations() {
    for tone in [0, 17, 40, 62] {
        let mut noise = SampleHoldNoise::new();
        noise.init(1234);
        noise.set_tone(tone);

        // First tick draws immediately.
        noise.tick();
        let held = noise.value();
        assert!((-4608..4608).contains(&held));

        // Unchanged for exactly MAX_PARAM - tone + 1 ticks since the draw.
        let interval = MAX_PARAM - tone + 1;
        for _ in 0..interval - 1 {
            noise.tick();
            assert_eq!(noise.value(), held, "value changed during hold (tone {tone})");
        }
        noise.tick();
        assert_ne!(noise.value(), held, "value kept across regeneration (tone {tone})");
    }
}

#[test]
fn noise_fastest_tone_redraws_every_tick() {
    let mut noise = SampleHoldNoise::new();
    noise.init(1234);
    noise.set_tone(MAX_PARAM);

    let mut previous = None;
    for _ in 0..50 {
        noise.tick();
        assert_ne!(Some(noise.value()), previous);
        previous = Some(noise.value());
    }
}
