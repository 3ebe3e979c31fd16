//! Fallback alarm tone synthesis.
//!
//! Renders a decaying sine beep as a 16-bit mono PCM WAV so it can be
//! played by the same system player as the regular alarm asset.

use std::f32::consts::PI;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub start_gain: f32,
    pub end_gain: f32,
    pub sample_rate: u32,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            frequency_hz: 800.0,
            duration: Duration::from_secs(1),
            start_gain: 0.3,
            end_gain: 0.01,
            sample_rate: 44_100,
        }
    }
}

impl ToneSpec {
    pub fn sample_count(&self) -> usize {
        (self.duration.as_secs_f64() * self.sample_rate as f64).round() as usize
    }

    /// Gain at time `t` seconds, ramping exponentially from start to end.
    pub fn gain_at(&self, t: f32) -> f32 {
        let length = self.duration.as_secs_f32();
        if length <= 0.0 {
            return self.end_gain;
        }
        let progress = (t / length).clamp(0.0, 1.0);
        self.start_gain * (self.end_gain / self.start_gain).powf(progress)
    }

    pub fn render_samples(&self) -> Vec<i16> {
        let rate = self.sample_rate as f32;
        (0..self.sample_count())
            .map(|n| {
                let t = n as f32 / rate;
                let value = (2.0 * PI * self.frequency_hz * t).sin() * self.gain_at(t);
                (value.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
            })
            .collect()
    }

    /// Encode the tone as a complete RIFF/WAVE file.
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        let samples = self.render_samples();
        let data_len = (samples.len() * 2) as u32;
        let byte_rate = self.sample_rate * 2;

        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");

        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&self.sample_rate.to_le_bytes());
        out.extend_from_slice(&byte_rate.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes()); // block align
        out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for sample in samples {
            out.extend_from_slice(&sample.to_le_bytes());
        }
        out
    }
}
