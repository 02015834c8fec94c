use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

use crate::cache::{ResourceBackend, ResourceCache};
use crate::config;
use crate::error::Error;
use crate::export;
use crate::logger::Logger;

/// A fully decoded sound effect, kept in memory and replayed on demand.
/// Released handles have `frame_count` 0 and no samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    pub frame_count: u32,
    pub sample_rate: u32,
    /// Bits per sample of the source material (32 for synthesized sounds).
    pub sample_size: u16,
    pub channels: u16,
    pub samples: Vec<f32>,
}

/// Embedded wave constants, exactly as the exporter writes them.
pub struct WaveData {
    pub frame_count: u32,
    pub sample_rate: u32,
    pub sample_size: u16,
    pub channels: u16,
    pub data: &'static [i16],
}

pub struct AudioBackend;

impl AudioBackend {
    pub fn new() -> Self {
        AudioBackend
    }
}

impl Default for AudioBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn load_failure(source: &Path, reason: String) -> Error {
    Error::LoadFailure {
        kind: AudioBackend::KIND,
        source: source.display().to_string(),
        reason,
    }
}

impl ResourceBackend for AudioBackend {
    type Handle = Sound;
    type Embedded = WaveData;

    const KIND: &'static str = "audio";

    fn decode_path(&mut self, path: &Path) -> Result<Sound, Error> {
        let file = File::open(path).map_err(|e| load_failure(path, e.to_string()))?;
        let decoder =
            Decoder::new(BufReader::new(file)).map_err(|e| load_failure(path, e.to_string()))?;
        let sample_rate = decoder.sample_rate();
        let channels = decoder.channels();
        let samples: Vec<f32> = decoder.convert_samples::<f32>().collect();
        let frame_count = (samples.len() / channels.max(1) as usize) as u32;
        Ok(Sound {
            frame_count,
            sample_rate,
            sample_size: 16,
            channels,
            samples,
        })
    }

    fn decode_embedded(&mut self, data: &WaveData) -> Result<Sound, Error> {
        let expected = (data.frame_count as usize) * (data.channels as usize);
        if data.data.len() != expected {
            return Err(Error::LoadFailure {
                kind: Self::KIND,
                source: String::from("<embedded>"),
                reason: format!(
                    "wave data is {} samples, expected {} for {} frames x {} channels",
                    data.data.len(),
                    expected,
                    data.frame_count,
                    data.channels
                ),
            });
        }
        let samples = data
            .data
            .iter()
            .map(|&s| f32::from(s) / 32768.0)
            .collect();
        Ok(Sound {
            frame_count: data.frame_count,
            sample_rate: data.sample_rate,
            sample_size: data.sample_size,
            channels: data.channels,
            samples,
        })
    }

    fn is_valid(&self, handle: &Sound) -> bool {
        handle.frame_count > 0
            && handle.sample_rate > 0
            && handle.channels > 0
            && !handle.samples.is_empty()
    }

    fn release(&mut self, handle: &mut Sound) {
        handle.samples = Vec::new();
        handle.frame_count = 0;
    }

    fn export_enabled(&self) -> bool {
        config::BUILD_AUDIO_MODULES
    }

    fn export_module(&self, source: &Path, out_dir: &Path) -> Result<PathBuf, Error> {
        let file = File::open(source).map_err(|e| load_failure(source, e.to_string()))?;
        let decoder =
            Decoder::new(BufReader::new(file)).map_err(|e| load_failure(source, e.to_string()))?;
        let sample_rate = decoder.sample_rate();
        let channels = decoder.channels();
        let samples: Vec<i16> = decoder.convert_samples::<i16>().collect();
        let frame_count = (samples.len() / channels.max(1) as usize) as u32;
        export::write_wave_module(
            source,
            out_dir,
            frame_count,
            sample_rate,
            16,
            channels,
            &samples,
        )
        .map_err(|e| load_failure(source, e.to_string()))
    }
}

struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOutput {
    fn open(logger: &Logger) -> Option<Self> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Some(AudioOutput {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                logger.error(&format!(
                    "Failed to open audio output: {e}. Continuing without sound."
                ));
                None
            }
        }
    }

    fn play(&self, sound: &Sound, logger: &Logger) {
        let buffer = SamplesBuffer::new(sound.channels, sound.sample_rate, sound.samples.clone());
        if let Err(e) = self.handle.play_raw(buffer) {
            logger.error(&format!("Failed to play audio: {e}"));
        }
    }
}

/// Sound cache plus the output device it plays through.
///
/// Playback is fire-and-forget; a missing device or the `DISABLE_AUDIO`
/// gate turn `play` into a logged no-op rather than an error.
pub struct AudioSystem {
    pub cache: ResourceCache<AudioBackend>,
    output: Option<AudioOutput>,
    logger: Arc<Logger>,
}

impl AudioSystem {
    pub fn new(logger: Arc<Logger>) -> Self {
        let output = if config::DISABLE_AUDIO {
            logger.info("Audio disabled in config.");
            None
        } else {
            AudioOutput::open(&logger)
        };
        AudioSystem {
            cache: ResourceCache::new(AudioBackend::new(), Arc::clone(&logger)),
            output,
            logger,
        }
    }

    /// Render the built-in effects and load them under their fixed keys.
    pub fn load_audio_resources(&mut self) -> Result<(), Error> {
        self.logger.info("Loading audio resources.");
        self.cache.load_handle("spring-effect", synth::spring_effect())?;
        self.cache.load_handle("game-over", synth::game_over())?;
        self.cache.load_handle("level-complete", synth::level_complete())?;
        self.cache.load_handle("score", synth::score_blip())?;
        self.logger.info("Audio resources loaded successfully.");
        Ok(())
    }

    pub fn play(&self, key: &str) {
        if config::DISABLE_AUDIO {
            self.logger.warning("Audio disabled in config.");
            return;
        }
        // A miss is already logged by the cache; keep the frame loop going.
        let Ok(sound) = self.cache.get(key) else {
            return;
        };
        if let Some(output) = &self.output {
            self.logger.info(&format!("Playing audio '{key}'."));
            output.play(sound, &self.logger);
        }
    }

    pub fn unload_all(&mut self) {
        self.cache.unload_all();
    }
}

/// The four built-in effects as little dsp graphs, rendered once at startup.
mod synth {
    use fundsp::prelude64::*;

    use super::Sound;

    const SAMPLE_RATE: f64 = 44100.0;

    fn render(unit: &mut dyn AudioUnit, seconds: f64) -> Sound {
        unit.set_sample_rate(SAMPLE_RATE);
        let frames = (SAMPLE_RATE * seconds) as usize;
        let mut samples = Vec::with_capacity(frames);
        for _ in 0..frames {
            samples.push(unit.get_mono());
        }
        Sound {
            frame_count: frames as u32,
            sample_rate: SAMPLE_RATE as u32,
            sample_size: 32,
            channels: 1,
            samples,
        }
    }

    /// Jump: a quick upward chirp.
    pub fn spring_effect() -> Sound {
        let freq = lfo(|t: f64| lerp11(320.0, 660.0, (t / 0.12).min(1.0)));
        let gain = lfo(|t: f64| lerp11(0.20, 0.0, (t / 0.18).min(1.0)));
        let mut unit = (freq >> triangle()) * gain;
        render(&mut unit, 0.18)
    }

    /// Death: a sawtooth falling from 400 Hz to 80 Hz while fading out.
    pub fn game_over() -> Sound {
        let freq = lfo(|t: f64| lerp11(400.0, 80.0, (t / 0.4).min(1.0)));
        let gain = lfo(|t: f64| lerp11(0.15, 0.0, (t / 0.5).min(1.0)));
        let mut unit = (freq >> saw()) * gain;
        render(&mut unit, 0.5)
    }

    /// Pipe passed: a two-note blip.
    pub fn score_blip() -> Sound {
        let freq = lfo(|t: f64| if t < 0.05 { 880.0 } else { 1174.66 });
        let gain = lfo(|t: f64| lerp11(0.18, 0.0, (t / 0.12).min(1.0)));
        let mut unit = (freq >> sine()) * gain;
        render(&mut unit, 0.12)
    }

    /// Small rising arpeggio; kept loaded for parity with the asset table.
    pub fn level_complete() -> Sound {
        let freq = lfo(|t: f64| {
            if t < 0.09 {
                523.25
            } else if t < 0.18 {
                659.25
            } else {
                783.99
            }
        });
        let gain = lfo(|t: f64| lerp11(0.16, 0.0, (t / 0.3).min(1.0)));
        let mut unit = (freq >> triangle()) * gain;
        render(&mut unit, 0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_effects_are_valid_mono_sounds() {
        let backend = AudioBackend::new();
        for sound in [
            synth::spring_effect(),
            synth::game_over(),
            synth::score_blip(),
            synth::level_complete(),
        ] {
            assert!(backend.is_valid(&sound));
            assert_eq!(sound.channels, 1);
            assert_eq!(sound.sample_rate, 44100);
            assert_eq!(sound.frame_count as usize, sound.samples.len());
        }
    }

    #[test]
    fn embedded_wave_round_trip() {
        let mut backend = AudioBackend::new();
        let wave = WaveData {
            frame_count: 4,
            sample_rate: 22050,
            sample_size: 16,
            channels: 1,
            data: &[0, 16384, -16384, 0],
        };
        let sound = backend.decode_embedded(&wave).expect("decode");
        assert!(backend.is_valid(&sound));
        assert_eq!(sound.frame_count, 4);
        assert_eq!(sound.sample_rate, 22050);
        assert!((sound.samples[1] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn embedded_wave_with_wrong_length_fails() {
        let mut backend = AudioBackend::new();
        let wave = WaveData {
            frame_count: 4,
            sample_rate: 22050,
            sample_size: 16,
            channels: 2,
            data: &[0, 0, 0],
        };
        let err = backend.decode_embedded(&wave).expect_err("short data");
        assert!(matches!(err, Error::LoadFailure { .. }));
    }

    #[test]
    fn released_sounds_are_invalid() {
        let mut backend = AudioBackend::new();
        let mut sound = synth::score_blip();
        backend.release(&mut sound);
        assert!(!backend.is_valid(&sound));
    }
}
