//! Local keyword tier, the guaranteed last resort.
//!
//! Scores are a pure function of the raw transcript: an engagement tier from
//! word count sets the base, then fixed therapist-quality and
//! client-progress keyword sets shift it. No network, no failure mode.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{AnalysisRequest, ProviderTier};
use crate::error::Result;
use crate::heuristics::{occurrence_count, round1};

const THERAPIST_POSITIVE: &[&str] = &[
    "tell me more",
    "that sounds",
    "i hear you",
    "makes sense",
    "take your time",
    "i appreciate you sharing",
    "that's understandable",
    "you're not alone",
];

const THERAPIST_NEGATIVE: &[&str] = &[
    "you should just",
    "calm down",
    "that's wrong",
    "we're out of time",
    "stop talking",
    "not my problem",
];

const CLIENT_POSITIVE: &[&str] = &[
    "better",
    "progress",
    "proud",
    "confident",
    "hopeful",
    "improving",
    "managing",
    "grateful",
    "stronger",
];

const CLIENT_NEGATIVE: &[&str] = &[
    "worse",
    "hopeless",
    "give up",
    "pointless",
    "exhausted",
    "miserable",
    "can't sleep",
    "numb",
];

/// Base score from transcript length: short exchanges carry less signal, so
/// they start from a lower engagement tier.
fn engagement_base(word_count: usize) -> f64 {
    if word_count < 50 {
        4.0
    } else if word_count < 200 {
        5.0
    } else if word_count < 500 {
        6.0
    } else {
        7.0
    }
}

/// The full local scoring law: engagement base, plus 0.3 per net
/// therapist-quality hit and 0.4 per net client-progress hit, clamped to
/// [1, 10] and rounded to one decimal.
pub fn fallback_score(transcript: &str) -> f64 {
    let text = transcript.to_lowercase();
    let base = engagement_base(transcript.split_whitespace().count());

    let therapist_pos = occurrence_count(&text, THERAPIST_POSITIVE) as f64;
    let therapist_neg = occurrence_count(&text, THERAPIST_NEGATIVE) as f64;
    let client_pos = occurrence_count(&text, CLIENT_POSITIVE) as f64;
    let client_neg = occurrence_count(&text, CLIENT_NEGATIVE) as f64;

    let score = base + 0.3 * (therapist_pos - therapist_neg) + 0.4 * (client_pos - client_neg);
    round1(score.clamp(1.0, 10.0))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTier;

impl LocalTier {
    /// Produce the generic payload shape. Lacks framework-specific evidence
    /// on purpose; downstream parsing defaults those fields to empty lists.
    pub fn analyze(&self, request: &AnalysisRequest) -> Value {
        json!({
            "score": fallback_score(&request.transcript),
            "areas_for_improvement": [
                "Configure a hosted analysis provider for framework-specific depth"
            ],
            "note": "Keyword-based local analysis; hosted providers unavailable or not configured."
        })
    }
}

#[async_trait]
impl ProviderTier for LocalTier {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn attempt(&self, request: &AnalysisRequest) -> Result<Option<Value>> {
        Ok(Some(self.analyze(request)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_words(n: usize) -> String {
        vec!["mango"; n].join(" ")
    }

    #[test]
    fn engagement_tiers_have_inclusive_upper_bounds() {
        assert_eq!(engagement_base(0), 4.0);
        assert_eq!(engagement_base(49), 4.0);
        assert_eq!(engagement_base(50), 5.0);
        assert_eq!(engagement_base(199), 5.0);
        assert_eq!(engagement_base(200), 6.0);
        assert_eq!(engagement_base(499), 6.0);
        assert_eq!(engagement_base(500), 7.0);
    }

    #[test]
    fn long_neutral_transcript_scores_exactly_base() {
        // 600 words, zero keyword hits: score is the top tier base untouched
        assert_eq!(fallback_score(&neutral_words(600)), 7.0);
    }

    #[test]
    fn short_neutral_transcript_scores_low_base() {
        assert_eq!(fallback_score(&neutral_words(30)), 4.0);
    }

    #[test]
    fn positive_client_language_raises_the_score() {
        let text = format!("{} I feel better and I am proud of my progress", neutral_words(500));
        // base 7.0 + 0.4 * 3 client-progress hits
        assert_eq!(fallback_score(&text), 8.2);
    }

    #[test]
    fn negative_client_language_lowers_the_score() {
        let text = format!("{} everything feels hopeless and pointless, i should give up", neutral_words(500));
        assert_eq!(fallback_score(&text), 7.0 - 0.4 * 3.0);
    }

    #[test]
    fn score_is_clamped_to_valid_range() {
        let bleak = "hopeless pointless worse miserable exhausted numb ".repeat(10);
        let score = fallback_score(&bleak);
        assert!(score >= 1.0);
        let glowing = "better progress proud confident hopeful stronger ".repeat(10);
        let score = fallback_score(&glowing);
        assert!(score <= 10.0);
    }

    #[test]
    fn payload_always_carries_score_and_note() {
        let request = AnalysisRequest {
            prompt: String::new(),
            context: String::new(),
            transcript: "Client: fine.".to_string(),
        };
        let payload = LocalTier.analyze(&request);
        assert!(payload["score"].as_f64().is_some());
        assert!(payload["note"].as_str().is_some());
    }
}
