//! End-to-end pipeline tests: progression text in, metrics bundle out.

use improv_analysis::{analyze, AnalysisRequest, NoteEvent, ProgressionInput};
use pretty_assertions::assert_eq;

fn note(pitch: u8, start_ms: f64, duration_ms: f64) -> NoteEvent {
    NoteEvent {
        pitch,
        velocity: 90,
        start_ms,
        duration_ms,
    }
}

fn request(notes: Vec<NoteEvent>, progression: &str) -> AnalysisRequest {
    AnalysisRequest {
        notes,
        progression: ProgressionInput::Source(progression.into()),
        tempo: 120.0,
        time_signature: "4/4".into(),
        key: "C".into(),
        modality: "Major".into(),
        skill_level: None,
    }
}

/// Four quarter notes C D E F over "C G" at 120 bpm: a 2-second take,
/// so slot C covers [0,1) and slot G covers [1,2).
fn quarter_note_take() -> AnalysisRequest {
    request(
        vec![
            note(60, 0.0, 500.0),
            note(62, 500.0, 500.0),
            note(64, 1000.0, 500.0),
            note(65, 1500.0, 500.0),
        ],
        "C G",
    )
}

#[test]
fn end_to_end_slot_assignment_and_chord_tones() {
    let response = analyze(&quarter_note_take());
    let contexts = &response.note_contexts;
    assert_eq!(contexts.len(), 4);

    // C and D land in slot C; E and F in slot G
    assert_eq!(contexts[0].slot_index, Some(0));
    assert_eq!(contexts[1].slot_index, Some(0));
    assert_eq!(contexts[2].slot_index, Some(1));
    assert_eq!(contexts[3].slot_index, Some(1));

    // C is a chord tone of C; D is not
    assert!(contexts[0].is_chord_tone);
    assert!(!contexts[1].is_chord_tone);
    // over G: D would be a chord tone but E and F are not... E sits at
    // t=1.0 which is beat 2 of the bar
    assert!(!contexts[2].is_chord_tone);
    assert!(!contexts[3].is_chord_tone);

    // all four notes are C-major scale tones
    assert_eq!(response.metrics.scale_tone_ratio, 1.0);
    assert_eq!(response.metrics.outside_scale_ratio, 0.0);
    assert_eq!(response.metrics.chord_tone_ratio, 0.25);
}

#[test]
fn end_to_end_notes_within_first_slot() {
    // same melody squeezed into slot C only: E is a chord tone again
    let response = analyze(&request(
        vec![
            note(60, 0.0, 200.0),
            note(62, 200.0, 200.0),
            note(64, 400.0, 200.0),
        ],
        "C",
    ));
    let contexts = &response.note_contexts;
    assert!(contexts[0].is_chord_tone); // C
    assert!(!contexts[1].is_chord_tone); // D
    assert!(contexts[2].is_chord_tone); // E
}

#[test]
fn beat_positions_at_120_bpm() {
    let response = analyze(&quarter_note_take());
    let contexts = &response.note_contexts;

    assert_eq!(contexts[0].beat_index, 0);
    assert!(contexts[0].is_strong_beat);
    assert_eq!(contexts[2].beat_index, 2);
    assert_eq!(contexts[2].beat_in_bar, 2);
    assert!(contexts[2].is_strong_beat); // beat 3 of a 4/4 bar
    assert_eq!(contexts[3].beat_index, 3);
    assert!(!contexts[3].is_strong_beat);
}

#[test]
fn alternative_group_counts_either_chord() {
    // B (pitch 71) is in Em but not C; with "[C Em]" it counts
    let grouped = analyze(&request(vec![note(71, 0.0, 500.0)], "[C Em]"));
    assert!(grouped.note_contexts[0].is_chord_tone);
    assert_eq!(grouped.per_chord[0].label, "C/Em");

    let plain = analyze(&request(vec![note(71, 0.0, 500.0)], "C"));
    assert!(!plain.note_contexts[0].is_chord_tone);
}

#[test]
fn perfect_fifth_contour() {
    let response = analyze(&request(
        vec![note(60, 0.0, 500.0), note(67, 1000.0, 500.0)],
        "C",
    ));
    assert_eq!(response.interval_distribution["large"], 1);
    assert_eq!(response.interval_distribution["small"], 0);
    assert_eq!(response.contour.large_leap_ratio, 1.0);
    assert_eq!(response.contour.small_step_ratio, 0.0);
}

#[test]
fn single_note_contour_short_circuits() {
    let response = analyze(&request(vec![note(60, 0.0, 500.0)], "C"));
    assert_eq!(response.contour.intervals.total(), 0);
    assert_eq!(response.contour.interval_variance, 0.0);
    assert!(response.contour.feedback.contains("Not enough notes"));
}

#[test]
fn determinism_byte_identical_responses() {
    let request = quarter_note_take();
    let first = serde_json::to_string(&analyze(&request)).unwrap();
    let second = serde_json::to_string(&analyze(&request)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn ratio_invariants_hold() {
    let takes = [
        quarter_note_take(),
        request(vec![note(61, 0.0, 100.0), note(66, 300.0, 100.0)], "Dm G7"),
        request(vec![note(72, 0.0, 900.0)], "[Am C] F G7"),
    ];

    for take in takes {
        let response = analyze(&take);
        let m = &response.metrics;
        assert_eq!(m.scale_tone_ratio + m.outside_scale_ratio, 1.0);
        for ratio in [
            m.chord_tone_ratio,
            m.scale_tone_ratio,
            m.strong_beat_chord_tone_ratio,
            m.outside_scale_ratio,
        ] {
            assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} out of range");
        }
    }
}

#[test]
fn empty_take_yields_complete_bundle() {
    let response = analyze(&request(vec![], "C G Am F"));
    assert_eq!(response.metrics.chord_tone_ratio, 0.0);
    assert!(response.per_chord.is_empty());
    assert!(response.note_contexts.is_empty());
    assert!(!response.contour.feedback.is_empty());
}

#[test]
fn unknown_progression_text_degrades_not_errors() {
    let response = analyze(&request(
        vec![note(60, 0.0, 500.0), note(64, 500.0, 500.0)],
        "???chord Qx7",
    ));
    // unknown chords resolve to empty sets: nothing is a chord tone
    assert_eq!(response.metrics.chord_tone_ratio, 0.0);
    // scale classification is untouched
    assert_eq!(response.metrics.scale_tone_ratio, 1.0);
}

#[test]
fn unknown_modality_means_no_note_is_a_scale_tone() {
    let mut take = quarter_note_take();
    take.modality = "mystery mode".into();

    let response = analyze(&take);
    // empty scale set: nothing qualifies, everything counts as outside
    assert_eq!(response.metrics.scale_tone_ratio, 0.0);
    assert_eq!(response.metrics.outside_scale_ratio, 1.0);
    assert!(response.note_contexts.iter().all(|c| !c.is_scale_tone));
    // chord classification is unaffected by the missing scale
    assert_eq!(response.metrics.chord_tone_ratio, 0.25);
}

#[test]
fn embedded_snippet_progression() {
    let source = "// generated accompaniment\nconst chart = \"<C G Am F> x4\";";
    let response = analyze(&request(
        vec![
            note(60, 0.0, 500.0),
            note(67, 500.0, 500.0),
            note(69, 1000.0, 500.0),
            note(65, 1500.0, 500.0),
        ],
        source,
    ));
    // four slots of 0.5s each; every note lands on its own chord's root
    assert_eq!(response.metrics.chord_tone_ratio, 1.0);
    assert_eq!(response.per_chord.len(), 4);
}

#[test]
fn pre_parsed_tokens_accepted() {
    use progression::ChordToken;

    let response = analyze(&AnalysisRequest {
        notes: vec![note(60, 0.0, 500.0), note(64, 500.0, 500.0)],
        progression: ProgressionInput::Tokens(vec![ChordToken::single("Cmaj7", 0)]),
        tempo: 120.0,
        time_signature: "4/4".into(),
        key: "C".into(),
        modality: "Major".into(),
        skill_level: None,
    });
    assert_eq!(response.metrics.chord_tone_ratio, 1.0);
    assert_eq!(response.per_chord[0].label, "Cmaj7");
}
