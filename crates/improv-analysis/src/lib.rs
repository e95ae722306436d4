//! Harmonic and melodic analysis of recorded improvisations.
//!
//! Takes a note stream from pitch detection, a chord progression in the
//! mini-language handled by the `progression` crate, and the take's
//! tempo/key context, and produces a deterministic metrics bundle:
//! chord-tone and scale-tone ratios, beat-placement stats, per-chord
//! breakdowns, and melodic contour feedback.
//!
//! The pipeline is pure and synchronous. Malformed musical input never
//! fails an analysis — unknown chords and scales degrade to empty
//! pitch-class sets, and every ratio guards its denominator.
//!
//! # Example
//!
//! ```
//! use improv_analysis::{analyze, AnalysisRequest, NoteEvent, ProgressionInput};
//!
//! let request = AnalysisRequest {
//!     notes: vec![
//!         NoteEvent { pitch: 60, velocity: 90, start_ms: 0.0, duration_ms: 450.0 },
//!         NoteEvent { pitch: 64, velocity: 85, start_ms: 500.0, duration_ms: 450.0 },
//!         NoteEvent { pitch: 67, velocity: 88, start_ms: 1000.0, duration_ms: 900.0 },
//!     ],
//!     progression: ProgressionInput::Source("C G".into()),
//!     tempo: 120.0,
//!     time_signature: "4/4".into(),
//!     key: "C".into(),
//!     modality: "Major".into(),
//!     skill_level: None,
//! };
//!
//! let response = analyze(&request);
//! assert!(response.metrics.chord_tone_ratio > 0.0);
//! assert_eq!(response.note_contexts.len(), 3);
//! ```

pub mod aggregate;
pub mod beat;
pub mod classify;
pub mod contour;
pub mod pitch;
pub mod resolver;
pub mod summary;
pub mod theory;
pub mod timeline;
pub mod types;
pub mod voicings;

pub use aggregate::{ChordSummary, HarmonicMetrics};
pub use beat::{beats_per_bar, classify_beat, BeatPosition};
pub use classify::NoteContext;
pub use contour::{analyze_contour, ContourAnalysis};
pub use resolver::Resolver;
pub use summary::{summarize_or_fallback, Summarizer, SUMMARY_FALLBACK};
pub use timeline::{build_timeline, TimelineSlot};
pub use types::{
    AnalysisRequest, AnalysisResponse, NoteEvent, ProgressionInput, SkillLevel,
};

use progression::ChordToken;
use tracing::debug;

/// Errors at the serialization boundary. The analysis pipeline itself
/// never fails; only a structurally malformed request can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed analysis request: {0}")]
    BadRequest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Recording length in seconds: the latest note end time.
fn total_duration_s(notes: &[NoteEvent]) -> f64 {
    notes.iter().map(NoteEvent::end_s).fold(0.0, f64::max)
}

/// Run the full analysis pipeline.
///
/// Pure and deterministic: identical requests produce identical
/// responses, byte for byte once serialized. Chord resolution state
/// lives in a resolver created here and dropped at the end, so
/// concurrent calls never share memoization across key/modality
/// contexts.
pub fn analyze(request: &AnalysisRequest) -> AnalysisResponse {
    let tokens: Vec<ChordToken> = match &request.progression {
        ProgressionInput::Source(source) => progression::parse(source).value,
        ProgressionInput::Tokens(tokens) => tokens.clone(),
    };

    let total = total_duration_s(&request.notes);
    let slots = timeline::build_timeline(&tokens, total);
    let bpb = beat::beats_per_bar(&request.time_signature);

    debug!(
        notes = request.notes.len(),
        tokens = tokens.len(),
        slots = slots.len(),
        total_duration_s = total,
        "running improvisation analysis"
    );

    let mut resolver = Resolver::new(&request.key, &request.modality);
    let contexts = classify::classify_notes(
        &request.notes,
        &slots,
        &mut resolver,
        request.tempo,
        bpb,
    );
    let contour = contour::analyze_contour(&request.notes);

    aggregate::build_response(contexts, contour)
}

/// JSON-in, JSON-out wrapper for callers proxying the engine.
///
/// The only error path is malformed request JSON; a well-formed request
/// always yields a complete response bundle.
pub fn analyze_json(request_json: &str) -> Result<String> {
    let request: AnalysisRequest = serde_json::from_str(request_json)?;
    let response = analyze(&request);
    Ok(serde_json::to_string(&response)?)
}
