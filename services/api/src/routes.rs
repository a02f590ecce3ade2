use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use banca_virtual::error::AppError;
use banca_virtual::workflows::evaluation::{RubricSource, ScoreInput, ScoreResult};
use banca_virtual::workflows::pitch::{section_coverage, COMMON_SECTIONS};
use banca_virtual::workflows::valuation::{
    dcf_simple, scorecard_valuation, vc_method, ScorecardInputs, DEFAULT_SCORECARD_BASE,
    DEFAULT_TERMINAL_GROWTH,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) inputs: ScoreInput,
    #[serde(default)]
    pub(crate) reasoning: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) rubric_id: String,
    pub(crate) rubric_name: String,
    pub(crate) rubric_version: String,
    pub(crate) rubric_source: RubricSource,
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) result: ScoreResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WhatIfRequest {
    pub(crate) inputs: ScoreInput,
    pub(crate) deltas: HashMap<String, f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WhatIfResponse {
    pub(crate) base: ScoreResult,
    pub(crate) simulated: ScoreResult,
    pub(crate) total_delta: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoverageRequest {
    pub(crate) text: String,
    /// Section labels to check; defaults to the common deck sections.
    #[serde(default)]
    pub(crate) sections: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CoverageResponse {
    pub(crate) coverage: f64,
    pub(crate) matched: Vec<String>,
    pub(crate) missing: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub(crate) enum ValuationRequest {
    Scorecard {
        #[serde(flatten)]
        inputs: ScorecardInputs,
        base: Option<f64>,
    },
    VcMethod {
        exit_value: f64,
        ownership: f64,
        discount: f64,
        years: u32,
    },
    Dcf {
        revenue_year1: f64,
        growth: f64,
        margin: f64,
        years: u32,
        discount: f64,
        terminal_growth: Option<f64>,
    },
}

#[derive(Debug, Serialize)]
pub(crate) struct ValuationResponse {
    pub(crate) method: &'static str,
    pub(crate) valuation: f64,
}

pub(crate) fn with_evaluation_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/evaluation/score",
            axum::routing::post(score_endpoint),
        )
        .route(
            "/api/v1/evaluation/what-if",
            axum::routing::post(what_if_endpoint),
        )
        .route(
            "/api/v1/pitch/coverage",
            axum::routing::post(coverage_endpoint),
        )
        .route("/api/v1/valuation", axum::routing::post(valuation_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let result = state
        .engine
        .score_with_reasoning(&payload.inputs, payload.reasoning)?;
    let rules = state.engine.rules();

    Ok(Json(ScoreResponse {
        rubric_id: rules.id.clone(),
        rubric_name: rules.name.clone(),
        rubric_version: rules.version.clone(),
        rubric_source: state.rubric_source.as_ref().clone(),
        evaluated_at: Utc::now(),
        result,
    }))
}

pub(crate) async fn what_if_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<WhatIfRequest>,
) -> Result<Json<WhatIfResponse>, AppError> {
    let base = state.engine.score(&payload.inputs)?;
    let simulated = state.engine.what_if(&payload.inputs, &payload.deltas)?;
    let total_delta = simulated.total - base.total;

    Ok(Json(WhatIfResponse {
        base,
        simulated,
        total_delta,
    }))
}

pub(crate) async fn coverage_endpoint(
    Json(payload): Json<CoverageRequest>,
) -> Json<CoverageResponse> {
    let sections: Vec<String> = payload
        .sections
        .unwrap_or_else(|| COMMON_SECTIONS.iter().map(|s| s.to_string()).collect());

    let coverage = section_coverage(&payload.text, &sections);

    let haystack = payload.text.to_lowercase();
    let (matched, missing): (Vec<String>, Vec<String>) = sections
        .into_iter()
        .partition(|section| haystack.contains(&section.to_lowercase()));

    Json(CoverageResponse {
        coverage,
        matched,
        missing,
    })
}

pub(crate) async fn valuation_endpoint(
    Json(payload): Json<ValuationRequest>,
) -> Result<Json<ValuationResponse>, AppError> {
    let response = match payload {
        ValuationRequest::Scorecard { inputs, base } => ValuationResponse {
            method: "scorecard",
            valuation: scorecard_valuation(inputs, base.unwrap_or(DEFAULT_SCORECARD_BASE)),
        },
        ValuationRequest::VcMethod {
            exit_value,
            ownership,
            discount,
            years,
        } => ValuationResponse {
            method: "vc_method",
            valuation: vc_method(exit_value, ownership, discount, years),
        },
        ValuationRequest::Dcf {
            revenue_year1,
            growth,
            margin,
            years,
            discount,
            terminal_growth,
        } => ValuationResponse {
            method: "dcf",
            valuation: dcf_simple(
                revenue_year1,
                growth,
                margin,
                years,
                discount,
                terminal_growth.unwrap_or(DEFAULT_TERMINAL_GROWTH),
            )?,
        },
    };

    Ok(Json(response))
}
