//! Mapping chord tokens onto even time slices of the recording.

use progression::ChordToken;
use serde::{Deserialize, Serialize};

/// One contiguous time interval owned by one progression token.
///
/// Slots exactly partition `[0, total)` into `tokens.len()` equal pieces.
/// Even slicing is deliberate: slot boundaries ignore tempo and time
/// signature even though beat classification uses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSlot {
    /// Chord names active in this slot (one, or a group's alternatives)
    pub chords: Vec<String>,
    pub start_s: f64,
    pub end_s: f64,
    pub index: usize,
}

impl TimelineSlot {
    /// Half-open containment: `start <= t < end`.
    pub fn contains(&self, time_s: f64) -> bool {
        self.start_s <= time_s && time_s < self.end_s
    }
}

/// Divide the recording's duration evenly across the tokens.
///
/// Empty tokens or a non-positive duration produce no slots.
pub fn build_timeline(tokens: &[ChordToken], total_duration_s: f64) -> Vec<TimelineSlot> {
    if tokens.is_empty() || total_duration_s <= 0.0 {
        return Vec::new();
    }

    let slot_duration = total_duration_s / tokens.len() as f64;
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| TimelineSlot {
            chords: token.names().to_vec(),
            start_s: i as f64 * slot_duration,
            end_s: (i + 1) as f64 * slot_duration,
            index: i,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn singles(names: &[&str]) -> Vec<ChordToken> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| ChordToken::single(*n, i))
            .collect()
    }

    #[test]
    fn four_tokens_over_eight_seconds() {
        let slots = build_timeline(&singles(&["C", "G", "Am", "F"]), 8.0);
        assert_eq!(slots.len(), 4);
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(slot.start_s, i as f64 * 2.0);
            assert_eq!(slot.end_s, (i + 1) as f64 * 2.0);
            assert_eq!(slot.index, i);
        }
        // contiguous and non-overlapping
        for pair in slots.windows(2) {
            assert_eq!(pair[0].end_s, pair[1].start_s);
        }
    }

    #[test]
    fn half_open_slot_boundaries() {
        let slots = build_timeline(&singles(&["C", "G"]), 2.0);
        assert!(slots[0].contains(0.0));
        assert!(!slots[0].contains(1.0));
        assert!(slots[1].contains(1.0));
        assert!(!slots[1].contains(2.0));
    }

    #[test]
    fn empty_tokens_or_zero_duration() {
        assert!(build_timeline(&[], 8.0).is_empty());
        assert!(build_timeline(&singles(&["C"]), 0.0).is_empty());
    }

    #[test]
    fn group_token_carries_all_alternatives() {
        let tokens = vec![
            ChordToken::group(vec!["C".into(), "Em".into()], 0),
            ChordToken::single("G", 1),
        ];
        let slots = build_timeline(&tokens, 4.0);
        assert_eq!(slots[0].chords, vec!["C".to_string(), "Em".to_string()]);
        assert_eq!(slots[1].chords, vec!["G".to_string()]);
    }
}
