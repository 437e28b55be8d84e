//! Renders a bar of drum hits to a WAV file.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use duodrum::params::Param;
use duodrum::voice::{DrumVoice, TickInputs, VoiceConfig};
use duodrum::MAX_LEVEL;

const TICK_RATE_HZ: u32 = 16_666;
const BEAT_TICKS: usize = 8333;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let mut voice = DrumVoice::new();
    voice.init(VoiceConfig::default());
    voice.nudge(Param::Blend, 16);
    log::info!("rendering with preset {:#010x}", voice.save());

    let ticks = 8 * BEAT_TICKS;
    let mut frames = Vec::with_capacity(ticks);
    for n in 0..ticks {
        let mut inputs = TickInputs::default();
        inputs.trigger[0] = n % (2 * BEAT_TICKS) == 0;
        inputs.trigger[1] = n % (2 * BEAT_TICKS) == BEAT_TICKS;
        frames.push(voice.tick(&inputs));
    }

    let path = Path::new("out/render_hits.wav");
    std::fs::create_dir_all(path.parent().unwrap()).ok();
    let spec = WavSpec {
        channels: 2,
        sample_rate: TICK_RATE_HZ,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for frame in &frames {
        writer.write_sample(frame[0] as f32 / MAX_LEVEL as f32).unwrap();
        writer.write_sample(frame[1] as f32 / MAX_LEVEL as f32).unwrap();
    }
    writer.finalize().unwrap();

    log::info!("wrote {} frames to {}", frames.len(), path.display());
}
