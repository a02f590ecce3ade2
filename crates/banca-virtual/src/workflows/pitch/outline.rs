use super::AnalyzerError;
use serde::{Deserialize, Serialize};

/// Extractors sample at most this many pages from the front of a deck.
pub const PAGE_SAMPLE_LIMIT: usize = 10;

/// First-line preview of a single sampled page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePreview {
    pub page_number: usize,
    pub first_line: String,
}

/// Structural outline of a pitch deck produced by an extraction adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckOutline {
    pub page_count: usize,
    /// Previews for up to [`PAGE_SAMPLE_LIMIT`] pages.
    pub preview: Vec<PagePreview>,
    /// Full text extracted from the sampled pages.
    pub text: String,
}

impl DeckOutline {
    /// Coverage of the common deck sections in the sampled text.
    pub fn structure_score(&self) -> f64 {
        super::deck_structure_score(&self.text)
    }
}

/// Adapter seam for PDF (or similar) text extraction.
pub trait OutlineExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> Result<DeckOutline, AnalyzerError>;
}
