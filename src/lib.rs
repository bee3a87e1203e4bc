//! sessionscope: multi-framework analysis of therapy-session transcripts.
//!
//! The core pipeline scores a transcript across seven therapeutic
//! frameworks, scans for red-flag patterns, runs a rule-based multi-method
//! assessment, and synthesizes insights and an effectiveness verdict.
//! Hosted providers improve the prose quality of the evidence; with no
//! credentials configured the whole pipeline still runs on local keyword
//! heuristics.

pub mod analysis;
pub mod assessment;
pub mod config;
pub mod error;
pub mod frameworks;
pub mod heuristics;
pub mod patterns;
pub mod providers;
pub mod schemas;
pub mod scoring;
pub mod synthesis;
pub mod transcript;

pub use analysis::AnalysisService;
pub use config::Config;
pub use error::{Result, SessionScopeError};
pub use schemas::AnalysisResult;

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv().ok() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
