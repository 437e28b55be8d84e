//! Renders a short drum pattern to a WAV file.


use duodrum::params::Param;
use duodrum::voice::{DrumVoice, TickInputs, VoiceConfig};

const TICK_RATE_HZ: u32 = 16_666;

#[test]
fn drum_pattern() {
    let duration = 2.0;
    let ticks = (duration * TICK_RATE_HZ as f32) as usize;

    let mut voice = DrumVoice::new();
    voice.init(VoiceConfig::default());
    voice.nudge(Param::Blend, 12);

    let mut frames = Vec::with_capacity(ticks);
    for n in 0..ticks {
        let mut inputs = TickInputs::default();
        // Bass on the half second, snare on the off-beats.
        inputs.trigger[0] = n % 8333 == 0;
        inputs.trigger[1] = n % 8333 == 4166;
        frames.push(voice.tick(&inputs));
    }

    assert!(frames.iter().any(|frame| *frame != [0, 0]));
    wav_writer::write("voice/drum_pattern.wav", TICK_RATE_HZ, &frames).ok();
}
