use banca_virtual::error::AppError;
use banca_virtual::workflows::evaluation::{
    load_rules, EvaluationEngine, LoadedRules, RubricSource,
};
use banca_virtual::workflows::pitch::{
    AnalyzerError, DeckOutline, OutlineExtractor, PagePreview, Transcriber, TranscriberConfig,
    Transcript, PAGE_SAMPLE_LIMIT,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<EvaluationEngine>,
    pub(crate) rubric_source: Arc<RubricSource>,
}

/// Loads the session rubric once at startup. Fallback status is already
/// logged by the loader; callers surface it in responses via
/// `RubricSource`.
pub(crate) fn load_startup_rubric(path: &Path) -> Result<LoadedRules, AppError> {
    Ok(load_rules(path)?)
}

/// Extraction double that splits plain text into "pages" on blank lines, so
/// the demo and tests can exercise the outline seam without a PDF backend.
pub(crate) struct PlainTextOutlineExtractor;

impl OutlineExtractor for PlainTextOutlineExtractor {
    fn extract(&self, document: &[u8]) -> Result<DeckOutline, AnalyzerError> {
        let text = std::str::from_utf8(document)
            .map_err(|err| AnalyzerError::Extraction(err.to_string()))?;

        let pages: Vec<&str> = text.split("\n\n").collect();
        let preview = pages
            .iter()
            .take(PAGE_SAMPLE_LIMIT)
            .enumerate()
            .map(|(index, page)| PagePreview {
                page_number: index + 1,
                first_line: page.lines().next().unwrap_or("").trim().to_string(),
            })
            .collect();

        let sampled: Vec<&str> = pages.iter().take(PAGE_SAMPLE_LIMIT).copied().collect();
        Ok(DeckOutline {
            page_count: pages.len(),
            preview,
            text: sampled.join("\n\n"),
        })
    }
}

/// Transcription double for environments without an audio backend; scoring
/// continues with "analysis unavailable".
#[derive(Default)]
pub(crate) struct UnavailableTranscriber {
    pub(crate) config: TranscriberConfig,
}

impl Transcriber for UnavailableTranscriber {
    fn transcribe(&self, _audio: &Path) -> Result<Transcript, AnalyzerError> {
        Err(AnalyzerError::Transcription(format!(
            "no {}/{} transcription backend configured",
            self.config.device, self.config.compute_type
        )))
    }
}
