//! Navigation cue synthesis.
//!
//! The launcher plays a short beep whenever a navigation actually moves
//! the selection. This crate renders that cue as PCM samples; handing them
//! to an output device is the backend's problem. The shell creates one
//! synth lazily and reuses it for every cue.

use serde::{Deserialize, Serialize};

/// Shape of the navigation cue: a short sine burst with an exponential
/// gain decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CueSpec {
    pub frequency_hz: f32,
    pub duration_ms: u32,
    /// Initial gain.
    pub gain: f32,
    /// Gain the exponential ramp decays to by the end of the cue.
    pub fade_floor: f32,
}

impl Default for CueSpec {
    fn default() -> Self {
        Self {
            frequency_hz: 800.0,
            duration_ms: 100,
            gain: 0.3,
            fade_floor: 0.01,
        }
    }
}

/// Renders cues at a fixed sample rate.
#[derive(Debug, Clone)]
pub struct CueSynth {
    spec: CueSpec,
    sample_rate: u32,
}

impl CueSynth {
    pub fn new(spec: CueSpec, sample_rate: u32) -> Self {
        log::debug!(
            "Cue synth created: {} Hz tone, {} ms at {} Hz sample rate",
            spec.frequency_hz,
            spec.duration_ms,
            sample_rate,
        );
        Self { spec, sample_rate }
    }

    pub fn spec(&self) -> &CueSpec {
        &self.spec
    }

    /// Render one cue as mono f32 samples in [-gain, gain].
    pub fn render(&self) -> Vec<f32> {
        let count = (self.sample_rate as u64 * self.spec.duration_ms as u64 / 1000) as usize;
        if count == 0 {
            return Vec::new();
        }
        let ratio = self.spec.fade_floor / self.spec.gain;
        (0..count)
            .map(|i| {
                let t = i as f32 / self.sample_rate as f32;
                let progress = i as f32 / count as f32;
                let envelope = self.spec.gain * ratio.powf(progress);
                envelope * (std::f32::consts::TAU * self.spec.frequency_hz * t).sin()
            })
            .collect()
    }
}

impl Default for CueSynth {
    fn default() -> Self {
        Self::new(CueSpec::default(), 44_100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_matches_kiosk_beep() {
        let spec = CueSpec::default();
        assert_eq!(spec.frequency_hz, 800.0);
        assert_eq!(spec.duration_ms, 100);
        assert_eq!(spec.gain, 0.3);
        assert_eq!(spec.fade_floor, 0.01);
    }

    #[test]
    fn render_length_matches_duration() {
        let synth = CueSynth::default();
        // 100 ms at 44.1 kHz.
        assert_eq!(synth.render().len(), 4410);
    }

    #[test]
    fn samples_stay_within_gain() {
        let synth = CueSynth::default();
        let gain = synth.spec().gain;
        for s in synth.render() {
            assert!(s.abs() <= gain + f32::EPSILON);
        }
    }

    #[test]
    fn envelope_decays_toward_floor() {
        let synth = CueSynth::default();
        let samples = synth.render();
        let head: f32 = samples[..441].iter().map(|s| s.abs()).fold(0.0, f32::max);
        let tail: f32 = samples[samples.len() - 441..]
            .iter()
            .map(|s| s.abs())
            .fold(0.0, f32::max);
        assert!(head > tail * 5.0, "head {head} should dwarf tail {tail}");
        assert!(tail <= synth.spec().fade_floor * 1.5);
    }

    #[test]
    fn zero_duration_renders_nothing() {
        let synth = CueSynth::new(
            CueSpec {
                duration_ms: 0,
                ..CueSpec::default()
            },
            44_100,
        );
        assert!(synth.render().is_empty());
    }
}
