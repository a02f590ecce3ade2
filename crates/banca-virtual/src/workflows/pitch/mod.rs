//! Pitch-material heuristics and the analyzer collaborator seams.
//!
//! Document extraction and audio transcription run out of process and can be
//! slow or flaky; they are modeled as traits so the scoring flow degrades to
//! "analysis unavailable" instead of aborting when an adapter fails.

mod outline;
mod sections;
mod transcript;

pub use outline::{DeckOutline, OutlineExtractor, PagePreview, PAGE_SAMPLE_LIMIT};
pub use sections::{deck_structure_score, section_coverage, COMMON_SECTIONS};
pub use transcript::{Transcriber, TranscriberConfig, Transcript};

/// Recoverable analyzer failure; callers report it and continue scoring.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("document extraction failed: {0}")]
    Extraction(String),
    #[error("transcription failed: {0}")]
    Transcription(String),
}
