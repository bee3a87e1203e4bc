//! Top-level session analysis service.
//!
//! One `analyze_session` call fans the transcript out to the red-flag
//! detector, the seven framework lenses (concurrently, each with its own
//! provider fallthrough), the multi-method engine, and the synthesizer, and
//! composes the final result. Provider faults never surface here; the only
//! error a caller sees is a transcript that cannot be analyzed at all.

use chrono::Utc;
use futures_util::future::join_all;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{AnalysisSettings, Config};
use crate::error::{Result, SessionScopeError};
use crate::frameworks::{FrameworkLens, LENSES, parse_analysis};
use crate::patterns::detect_negative_patterns;
use crate::providers::{AnalysisRequest, ProviderChain, openai::OpenAiTier};
use crate::schemas::{AnalysisResult, DomainScoreSet, FrameworkAnalysis, SessionRecord};
use crate::synthesis::{effectiveness_verdict, synthesize_insights};
use crate::transcript::Transcript;
use crate::{assessment, scoring};

pub struct AnalysisService {
    chain: ProviderChain,
    completion: Option<OpenAiTier>,
    settings: AnalysisSettings,
}

impl AnalysisService {
    /// Build the service from a loaded configuration. Credentials are read
    /// exactly once, here; every later call works off the constructed chain.
    pub fn new(config: Config) -> Self {
        let chain = ProviderChain::from_settings(&config.providers);
        let completion = config
            .providers
            .openai_api_key
            .is_some()
            .then(|| OpenAiTier::new(&config.providers));
        if chain.hosted_tiers().is_empty() {
            info!("no hosted provider credentials; running on local analysis only");
        }
        Self {
            chain,
            completion,
            settings: config.analysis,
        }
    }

    /// Analyze one session transcript end to end.
    ///
    /// Returns an error only for input that cannot be analyzed at all (an
    /// empty transcript); provider failures degrade silently to the local
    /// tier per lens.
    pub async fn analyze_session(&self, transcript_text: &str) -> Result<AnalysisResult> {
        let transcript = Transcript::new(transcript_text)?;
        info!(
            "analyzing session transcript ({} words)",
            transcript.word_count()
        );

        let negative_patterns = detect_negative_patterns(&transcript);
        if !negative_patterns.is_empty() {
            info!("detected {} negative pattern categories", negative_patterns.len());
        }

        // the lenses are independent, so their provider round-trips run
        // concurrently; fallthrough still happens per lens call
        let analyses = join_all(
            LENSES
                .iter()
                .map(|lens| self.run_lens(lens.clone(), &transcript)),
        )
        .await;

        let mut raw_domain_scores = DomainScoreSet::new();
        let mut detailed_analysis = BTreeMap::new();
        for analysis in analyses {
            raw_domain_scores.set(analysis.domain, analysis.score);
            detailed_analysis.insert(analysis.framework.clone(), analysis);
        }

        let domain_scores =
            scoring::adjust_for_negative_patterns(&raw_domain_scores, &negative_patterns);
        let multi_method = assessment::conduct_assessment(&transcript, &self.settings);
        let insights =
            synthesize_insights(&self.chain, &transcript, &detailed_analysis, &negative_patterns)
                .await;
        let effectiveness = effectiveness_verdict(&domain_scores, &negative_patterns);

        Ok(AnalysisResult {
            session_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            domain_scores,
            raw_domain_scores,
            detailed_analysis,
            negative_patterns,
            multi_method,
            key_insights: insights.insights,
            recommendations: insights.recommendations,
            session_themes: insights.themes,
            progress_indicators: insights.progress_indicators,
            effectiveness,
        })
    }

    async fn run_lens(
        &self,
        lens: Arc<dyn FrameworkLens + Send + Sync>,
        transcript: &Transcript,
    ) -> FrameworkAnalysis {
        let request = AnalysisRequest {
            prompt: lens.prompt(transcript.raw()),
            context: lens.context().to_string(),
            transcript: transcript.raw().to_string(),
        };
        let outcome = self.chain.analyze(&request).await;
        debug!(
            "{} analysis served by {} (fallback_used: {})",
            lens.name(),
            outcome.provider,
            outcome.fallback_used
        );
        parse_analysis(lens.as_ref(), &outcome.payload)
    }

    /// Answer a follow-up question about an analyzed session.
    ///
    /// This is a single hosted completion with the session context injected;
    /// there is no heuristic tier for free-form prose, so it requires the
    /// completion credential.
    pub async fn answer_query(&self, query: &str, session: &SessionRecord) -> Result<String> {
        let Some(completion) = &self.completion else {
            return Err(SessionScopeError::Config {
                message: "follow-up questions require a hosted completion credential".to_string(),
            });
        };

        let context = serde_json::to_string_pretty(&json!({
            "transcript": session.transcript,
            "analysis": session.analysis,
            "timestamp": session.timestamp,
        }))?;

        let prompt = format!(
            "Answer this question about the therapy session using the provided context.\n\
             \n\
             Question: {query}\n\
             \n\
             Context:\n\
             {context}\n\
             \n\
             Provide a thoughtful, therapeutic response that draws from the session content and\n\
             analysis.",
        );

        completion
            .complete_text(
                "You are a compassionate therapeutic assistant providing insights about therapy sessions.",
                &prompt,
                self.settings.max_answer_tokens,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_transcript_is_a_validation_error() {
        let service = AnalysisService::new(Config::default());
        let err = service.analyze_session("   ").await.unwrap_err();
        assert!(matches!(err, SessionScopeError::Validation { .. }));
    }

    #[tokio::test]
    async fn answer_query_without_credential_is_a_config_error() {
        let service = AnalysisService::new(Config::default());
        let result = service
            .analyze_session("Client: I had a steady week and kept my routine going.")
            .await
            .unwrap();
        let record = SessionRecord {
            transcript: "Client: I had a steady week.".to_string(),
            timestamp: result.timestamp,
            analysis: result,
        };
        let err = service.answer_query("How did it go?", &record).await.unwrap_err();
        assert!(matches!(err, SessionScopeError::Config { .. }));
    }
}
