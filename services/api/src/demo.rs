use crate::infra::{load_startup_rubric, PlainTextOutlineExtractor, UnavailableTranscriber};
use banca_virtual::config::AppConfig;
use banca_virtual::error::AppError;
use banca_virtual::workflows::evaluation::{
    parse_score_sheet, EvaluationEngine, LoadedRules, RubricSource, ScoreResult,
};
use banca_virtual::workflows::pitch::{OutlineExtractor, Transcriber};
use banca_virtual::workflows::valuation::{
    dcf_simple, scorecard_valuation, vc_method, ScorecardInputs, DEFAULT_SCORECARD_BASE,
    DEFAULT_TERMINAL_GROWTH,
};
use clap::Args;
use serde_json::json;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Rubric YAML file (defaults to the configured path, with embedded fallback)
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
    /// Judge's CSV score sheet with `Criterion ID` and `Points` columns
    #[arg(long)]
    pub(crate) sheet: PathBuf,
    /// What-if adjustment as `criterion=delta` (raw points), repeatable
    #[arg(long = "adjust", value_parser = parse_adjustment)]
    pub(crate) adjustments: Vec<(String, f64)>,
    /// Emit machine-readable JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Rubric YAML file for the walkthrough (embedded SEEDES rules otherwise)
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
}

fn parse_adjustment(raw: &str) -> Result<(String, f64), String> {
    let (id, delta) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected criterion=delta, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing criterion id in '{raw}'"));
    }
    let delta: f64 = delta
        .trim()
        .parse()
        .map_err(|_| format!("delta in '{raw}' is not a number"))?;
    Ok((id.to_string(), delta))
}

fn rubric_path(explicit: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(AppConfig::load()?.rubric.path),
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        rubric,
        sheet,
        adjustments,
        json,
    } = args;

    let loaded = load_startup_rubric(&rubric_path(rubric)?)?;
    let engine = EvaluationEngine::new(loaded.rules.clone());

    let file = File::open(&sheet)?;
    let inputs = parse_score_sheet(file)?;
    let result = engine.score(&inputs)?;

    let simulated = if adjustments.is_empty() {
        None
    } else {
        let deltas: HashMap<String, f64> = adjustments.into_iter().collect();
        Some(engine.what_if(&inputs, &deltas)?)
    };

    if json {
        let payload = json!({
            "rubric": {
                "id": loaded.rules.id,
                "name": loaded.rules.name,
                "version": loaded.rules.version,
                "source": loaded.source,
            },
            "result": result,
            "simulated": simulated,
        });
        println!("{payload:#}");
    } else {
        render_rubric_banner(&loaded);
        render_score(&result);
        if let Some(simulated) = simulated {
            println!("\nWhat-if simulation");
            println!("  new total:    {:.3} ({:+.3})", simulated.total, simulated.total - result.total);
            println!("  situation:    {}", situation_label(&simulated));
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let loaded = load_startup_rubric(&rubric_path(args.rubric)?)?;
    let engine = EvaluationEngine::new(loaded.rules.clone());

    println!("Banca Virtual — end-to-end demo");
    println!("===============================");
    render_rubric_banner(&loaded);

    // 1. Score a generated judge's sheet through the CSV import path.
    let sheet = sample_sheet(&engine);
    println!("\nSample score sheet");
    print!("{sheet}");

    let inputs = parse_score_sheet(sheet.as_bytes())?;
    let result = engine.score(&inputs)?;
    render_score(&result);

    // 2. Lift the weakest criterion and re-score counterfactually.
    if let Some(weakest) = result
        .details
        .iter()
        .min_by(|a, b| a.contribution.total_cmp(&b.contribution))
    {
        let delta = engine.rules().max_points_for(&weakest.id) * 0.2;
        let deltas: HashMap<String, f64> = [(weakest.id.clone(), delta)].into_iter().collect();
        let simulated = engine.what_if(&inputs, &deltas)?;

        println!("\nWhat-if: {} {:+.1} raw points", weakest.id, delta);
        println!("  new total:    {:.3} ({:+.3})", simulated.total, simulated.total - result.total);
        println!("  situation:    {}", situation_label(&simulated));
    }

    // 3. Pitch-deck structure heuristics over the outline seam.
    let outline = PlainTextOutlineExtractor.extract(SAMPLE_DECK.as_bytes())?;
    println!("\nPitch deck outline ({} pages sampled)", outline.preview.len());
    for page in &outline.preview {
        println!("  p{:<2} {}", page.page_number, page.first_line);
    }
    println!("  structure coverage: {:.0}%", outline.structure_score() * 100.0);

    // 4. Transcription degrades gracefully when no backend is configured.
    match UnavailableTranscriber::default().transcribe(Path::new("pitch.wav")) {
        Ok(transcript) => println!("\nTranscript ({}): {}", transcript.language, transcript.text),
        Err(err) => println!("\nAudio analysis unavailable: {err}"),
    }

    // 5. Illustrative valuations.
    let scorecard = scorecard_valuation(
        ScorecardInputs {
            team: 0.8,
            product: 0.7,
            market: 0.9,
            traction: 0.6,
            moat: 0.5,
        },
        DEFAULT_SCORECARD_BASE,
    );
    let vc = vc_method(50_000_000.0, 0.2, 0.5, 5);
    let dcf = dcf_simple(1_200_000.0, 0.35, 0.22, 5, 0.30, DEFAULT_TERMINAL_GROWTH)?;

    println!("\nIllustrative valuations");
    println!("  scorecard:    R$ {scorecard:>12.0}");
    println!("  vc method:    R$ {vc:>12.0}");
    println!("  dcf (simple): R$ {dcf:>12.0}");

    Ok(())
}

const SAMPLE_DECK: &str = "Problema\nPMEs perdem 14h/semana em conciliação manual\n\n\
Solução\nAutomação do fluxo financeiro com integração bancária\n\n\
Mercado\nTAM R$ 4,2B no Brasil\n\n\
Tração\n320 clientes pagantes, MRR R$ 180k\n\n\
Equipe\nDois fundadores, ex-fintech";

/// Fills one row per rubric criterion so the demo works with whichever
/// rubric is active, embedded fallback included.
fn sample_sheet(engine: &EvaluationEngine) -> String {
    let fractions = [0.8, 0.6, 0.9, 0.5, 0.75];
    let mut sheet = String::from("Criterion ID,Points\n");
    for (index, criterion) in engine.rules().criteria.iter().enumerate() {
        let points = criterion.max_points * fractions[index % fractions.len()];
        sheet.push_str(&format!("{},{points}\n", criterion.id));
    }
    sheet
}

fn render_rubric_banner(loaded: &LoadedRules) {
    println!(
        "\nRubric: {} (v{}) — {} criteria",
        loaded.rules.name,
        loaded.rules.version,
        loaded.rules.criteria.len()
    );
    if let RubricSource::EmbeddedFallback { reason } = &loaded.source {
        println!("  note: configured rubric unavailable, using embedded SEEDES rules ({reason})");
    }
}

fn render_score(result: &ScoreResult) {
    println!("\nEvaluation result");
    for detail in &result.details {
        println!(
            "  {:<28} weight {:.2}  score {:.2}  contributes {:.3}",
            detail.label, detail.weight, detail.score, detail.contribution
        );
    }
    println!("  total (0-1):  {:.3}", result.total);
    println!("  total (0-100): {:.1}", result.total * 100.0);
    println!("  situation:    {}", situation_label(result));
}

fn situation_label(result: &ScoreResult) -> &'static str {
    if result.eliminated {
        "Eliminado"
    } else {
        "Apto"
    }
}
