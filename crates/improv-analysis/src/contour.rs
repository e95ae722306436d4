//! Melodic shape statistics and rule-based feedback.
//!
//! Independent of the harmonic pipeline: works from the raw note stream
//! alone. Fully deterministic — identical input yields byte-identical
//! feedback text.

use serde::{Deserialize, Serialize};

use crate::types::NoteEvent;

/// Interval size classes in semitones: small <= 2, medium 3-5, large >= 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntervalHistogram {
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

impl IntervalHistogram {
    pub fn total(&self) -> usize {
        self.small + self.medium + self.large
    }
}

/// Duration classes: short < 0.3s, medium 0.3-0.8s inclusive, long > 0.8s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationHistogram {
    pub short: usize,
    pub medium: usize,
    pub long: usize,
}

impl DurationHistogram {
    pub fn total(&self) -> usize {
        self.short + self.medium + self.long
    }

    fn classes_used(&self) -> usize {
        [self.short, self.medium, self.long]
            .iter()
            .filter(|&&n| n > 0)
            .count()
    }
}

/// Melodic contour statistics plus the generated feedback text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourAnalysis {
    pub intervals: IntervalHistogram,
    pub small_step_ratio: f64,
    pub medium_step_ratio: f64,
    pub large_leap_ratio: f64,
    /// Mean absolute interval size in semitones
    pub interval_mean: f64,
    /// Population variance of interval sizes
    pub interval_variance: f64,
    /// Shannon entropy (bits) over the MIDI pitch histogram
    pub pitch_entropy_bits: f64,
    pub durations: DurationHistogram,
    pub mean_duration_s: f64,
    /// Triggered feedback lines joined by newline, in rule-table order
    pub feedback: String,
}

const NOT_ENOUGH_NOTES: &str =
    "Not enough notes to analyze melodic shape — record a few more phrases.";

const DEFAULT_POSITIVE: &str =
    "Good mix of steps, leaps, and note lengths — keep developing these ideas.";

/// Threshold-triggered feedback lines, checked and emitted in this order.
static RULES: &[(fn(&ContourAnalysis) -> bool, &str)] = &[
    (
        |c| c.small_step_ratio > 0.8,
        "Mostly stepwise motion — try adding a few leaps for contrast.",
    ),
    (
        |c| c.large_leap_ratio == 0.0,
        "No large leaps at all — an occasional wide jump adds drama.",
    ),
    (
        |c| c.large_leap_ratio > 0.4,
        "Lots of wide leaps — balance them with stepwise lines so phrases connect.",
    ),
    (
        |c| c.interval_variance < 2.0,
        "Interval sizes are very consistent — the line can start to feel mechanical.",
    ),
    (
        |c| c.interval_variance > 15.0,
        "Interval sizes swing wildly — the melody may feel unpredictable.",
    ),
    (
        |c| c.pitch_entropy_bits < 1.5,
        "Few distinct pitches — the line leans repetitive; explore more of the scale.",
    ),
    (
        |c| c.pitch_entropy_bits > 4.5,
        "Very high pitch variety — the line may feel scattered; try repeating a motif.",
    ),
    (
        |c| ratio(c.durations.short, c.durations.total()) > 0.8,
        "Mostly short notes — let a few phrases breathe with longer tones.",
    ),
    (
        |c| ratio(c.durations.long, c.durations.total()) > 0.6,
        "Mostly long tones — mix in shorter notes to build momentum.",
    ),
    (
        |c| c.durations.total() > 0 && c.durations.classes_used() == 1,
        "Every note sits in the same length range — vary durations for rhythmic interest.",
    ),
];

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Shannon entropy in bits over the pitch-value histogram.
fn pitch_entropy(notes: &[NoteEvent]) -> f64 {
    let mut histogram = [0usize; 128];
    let mut total = 0usize;
    for note in notes {
        if let Some(slot) = histogram.get_mut(note.pitch as usize) {
            *slot += 1;
            total += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }

    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}

fn zero_analysis(feedback: &str) -> ContourAnalysis {
    ContourAnalysis {
        intervals: IntervalHistogram::default(),
        small_step_ratio: 0.0,
        medium_step_ratio: 0.0,
        large_leap_ratio: 0.0,
        interval_mean: 0.0,
        interval_variance: 0.0,
        pitch_entropy_bits: 0.0,
        durations: DurationHistogram::default(),
        mean_duration_s: 0.0,
        feedback: feedback.to_string(),
    }
}

/// Analyze the melodic contour of a note stream.
///
/// Notes are stably sorted by start time first; intervals are the
/// absolute semitone distances between consecutive notes. Fewer than two
/// notes short-circuits to a fixed message with all-zero statistics —
/// the only path that would otherwise divide by zero.
pub fn analyze_contour(notes: &[NoteEvent]) -> ContourAnalysis {
    if notes.len() < 2 {
        return zero_analysis(NOT_ENOUGH_NOTES);
    }

    let mut ordered: Vec<&NoteEvent> = notes.iter().collect();
    ordered.sort_by(|a, b| a.start_ms.total_cmp(&b.start_ms));

    let distances: Vec<f64> = ordered
        .windows(2)
        .map(|pair| (pair[1].pitch as f64 - pair[0].pitch as f64).abs())
        .collect();

    let mut intervals = IntervalHistogram::default();
    for &d in &distances {
        if d <= 2.0 {
            intervals.small += 1;
        } else if d <= 5.0 {
            intervals.medium += 1;
        } else {
            intervals.large += 1;
        }
    }

    let n = distances.len() as f64;
    let interval_mean = distances.iter().sum::<f64>() / n;
    let interval_variance = distances
        .iter()
        .map(|d| {
            let diff = d - interval_mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    let mut durations = DurationHistogram::default();
    for note in &ordered {
        let secs = note.duration_s().abs();
        if secs < 0.3 {
            durations.short += 1;
        } else if secs <= 0.8 {
            durations.medium += 1;
        } else {
            durations.long += 1;
        }
    }
    let mean_duration_s = ordered
        .iter()
        .map(|note| note.duration_s().abs())
        .sum::<f64>()
        / ordered.len() as f64;

    let total_intervals = intervals.total();
    let mut analysis = ContourAnalysis {
        intervals,
        small_step_ratio: ratio(intervals.small, total_intervals),
        medium_step_ratio: ratio(intervals.medium, total_intervals),
        large_leap_ratio: ratio(intervals.large, total_intervals),
        interval_mean,
        interval_variance,
        pitch_entropy_bits: pitch_entropy(notes),
        durations,
        mean_duration_s,
        feedback: String::new(),
    };

    let lines: Vec<&str> = RULES
        .iter()
        .filter(|(applies, _)| applies(&analysis))
        .map(|(_, line)| *line)
        .collect();

    analysis.feedback = if lines.is_empty() {
        DEFAULT_POSITIVE.to_string()
    } else {
        lines.join("\n")
    };

    analysis
}
