//! Beat position from timestamp, tempo, and time signature.

use serde::{Deserialize, Serialize};

/// Tempo range the engine accepts; out-of-range requests are clamped.
pub const TEMPO_MIN: f64 = 30.0;
pub const TEMPO_MAX: f64 = 260.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatPosition {
    pub beat_index: u64,
    pub beat_in_bar: u32,
    pub is_strong: bool,
}

/// Beats per bar from an "N/D" time signature string.
///
/// Only the numerator matters here; anything unparseable defaults to 4.
pub fn beats_per_bar(time_signature: &str) -> u32 {
    time_signature
        .split('/')
        .next()
        .and_then(|n| n.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(4)
}

/// Classify a timestamp onto the beat grid.
///
/// Strong beats are beat 1 of every bar, plus beat 3 in quadruple and
/// longer meters.
pub fn classify_beat(time_s: f64, tempo_bpm: f64, beats_per_bar: u32) -> BeatPosition {
    let tempo = tempo_bpm.clamp(TEMPO_MIN, TEMPO_MAX);
    let beat_duration = 60.0 / tempo;

    let beat_index = (time_s.max(0.0) / beat_duration).floor() as u64;
    let beat_in_bar = (beat_index % beats_per_bar.max(1) as u64) as u32;
    let is_strong = beat_in_bar == 0 || (beats_per_bar >= 4 && beat_in_bar == 2);

    BeatPosition {
        beat_index,
        beat_in_bar,
        is_strong,
    }
}
