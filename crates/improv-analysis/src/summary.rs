//! Seam to the prose summarization collaborator.
//!
//! The summarizer runs after metrics are fully computed and its failure
//! can only ever degrade the prose field: callers get the fixed fallback
//! string, never an error and never a changed metrics bundle.

use anyhow::Result;
use tracing::warn;

use crate::types::{AnalysisRequest, AnalysisResponse};

/// What callers show when the summarizer is unavailable or fails.
pub const SUMMARY_FALLBACK: &str =
    "A detailed summary is unavailable right now — the metrics above still tell the story.";

/// Backend turning a metrics bundle into prose.
///
/// Implementations typically proxy an LLM; tests use stubs.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, request: &AnalysisRequest, response: &AnalysisResponse) -> Result<String>;
}

/// Run the summarizer, degrading any failure to the fixed fallback.
pub fn summarize_or_fallback(
    summarizer: &dyn Summarizer,
    request: &AnalysisRequest,
    response: &AnalysisResponse,
) -> String {
    match summarizer.summarize(request, response) {
        Ok(text) => text,
        Err(error) => {
            warn!(%error, "summarizer failed, using fallback text");
            SUMMARY_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProgressionInput;
    use pretty_assertions::assert_eq;

    struct Fixed(&'static str);

    impl Summarizer for Fixed {
        fn summarize(&self, _: &AnalysisRequest, _: &AnalysisResponse) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl Summarizer for Failing {
        fn summarize(&self, _: &AnalysisRequest, _: &AnalysisResponse) -> Result<String> {
            anyhow::bail!("backend timed out")
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            notes: vec![],
            progression: ProgressionInput::Source("C G".into()),
            tempo: 120.0,
            time_signature: "4/4".into(),
            key: "C".into(),
            modality: "Major".into(),
            skill_level: None,
        }
    }

    #[test]
    fn success_passes_text_through() {
        let request = request();
        let response = crate::analyze(&request);
        assert_eq!(
            summarize_or_fallback(&Fixed("nice solo"), &request, &response),
            "nice solo"
        );
    }

    #[test]
    fn failure_degrades_to_fallback_without_touching_metrics() {
        let request = request();
        let response = crate::analyze(&request);
        let before = response.clone();
        assert_eq!(
            summarize_or_fallback(&Failing, &request, &response),
            SUMMARY_FALLBACK
        );
        assert_eq!(response, before);
    }
}
