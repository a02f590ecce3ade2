use super::AnalyzerError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Transcription output consumed by the presentation layer only; the scoring
/// engine never depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub language: String,
    pub duration_seconds: f64,
    pub text: String,
}

/// Device/precision configuration for a transcription adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriberConfig {
    pub device: String,
    pub compute_type: String,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            device: "cpu".to_string(),
            compute_type: "int8".to_string(),
        }
    }
}

/// Adapter seam for audio transcription.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio: &Path) -> Result<Transcript, AnalyzerError>;
}
