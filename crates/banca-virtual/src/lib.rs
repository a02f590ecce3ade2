//! Core library for the Banca Virtual evaluation platform.
//!
//! The crate hosts the rubric-driven scoring engine plus its sibling
//! calculators (pitch-deck heuristics and illustrative valuations). All
//! evaluation logic is synchronous and pure; the HTTP/CLI surface lives in
//! the `banca-virtual-api` service crate.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
