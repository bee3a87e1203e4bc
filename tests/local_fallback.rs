//! Tests for the local scoring law and the provider chain's last resort.

use sessionscope::config::ProviderSettings;
use sessionscope::providers::local::fallback_score;
use sessionscope::providers::{AnalysisRequest, ProviderChain};

fn neutral_words(n: usize) -> String {
    vec!["mango"; n].join(" ")
}

#[test]
fn neutral_600_word_transcript_scores_exactly_seven() {
    // top engagement tier with zero keyword hits: base score untouched
    assert_eq!(fallback_score(&neutral_words(600)), 7.0);
}

#[test]
fn engagement_tiers_step_at_50_200_and_500_words() {
    assert_eq!(fallback_score(&neutral_words(49)), 4.0);
    assert_eq!(fallback_score(&neutral_words(50)), 5.0);
    assert_eq!(fallback_score(&neutral_words(199)), 5.0);
    assert_eq!(fallback_score(&neutral_words(200)), 6.0);
    assert_eq!(fallback_score(&neutral_words(499)), 6.0);
    assert_eq!(fallback_score(&neutral_words(500)), 7.0);
}

#[test]
fn client_progress_hits_weigh_point_four_each() {
    let text = format!("{} i feel better and proud", neutral_words(500));
    assert_eq!(fallback_score(&text), 7.0 + 0.4 * 2.0);
}

#[test]
fn therapist_quality_hits_weigh_point_three_each() {
    let text = format!("{} tell me more about that, i hear you", neutral_words(500));
    assert_eq!(fallback_score(&text), 7.0 + 0.3 * 2.0);
}

#[test]
fn score_never_leaves_the_one_to_ten_range() {
    let bleak = format!("{} {}", neutral_words(30), "hopeless pointless worse miserable ".repeat(20));
    let score = fallback_score(&bleak);
    assert!((1.0..=10.0).contains(&score));
    assert_eq!(score, 1.0);

    let glowing = format!("{} {}", neutral_words(30), "better progress proud confident ".repeat(20));
    let score = fallback_score(&glowing);
    assert!((1.0..=10.0).contains(&score));
    assert_eq!(score, 10.0);
}

#[test]
fn scoring_is_case_insensitive_over_raw_text() {
    let lower = format!("{} i feel better", neutral_words(500));
    let upper = format!("{} I FEEL BETTER", neutral_words(500));
    assert_eq!(fallback_score(&lower), fallback_score(&upper));
}

#[tokio::test]
async fn chain_without_credentials_always_answers() {
    let chain = ProviderChain::from_settings(&ProviderSettings::default());
    let request = AnalysisRequest {
        prompt: "Rate this session on a scale of 1-10.".to_string(),
        context: "testing".to_string(),
        transcript: neutral_words(600),
    };
    let outcome = chain.analyze(&request).await;
    assert_eq!(outcome.provider, "local");
    assert_eq!(outcome.payload["score"].as_f64(), Some(7.0));
    assert!(outcome.payload["note"].as_str().is_some());
}

#[tokio::test]
async fn local_tier_scores_the_transcript_not_the_prompt() {
    let chain = ProviderChain::from_settings(&ProviderSettings::default());
    // the prompt is full of positive keywords, the transcript is neutral
    let request = AnalysisRequest {
        prompt: format!("better proud confident progress {}", neutral_words(600)),
        context: "testing".to_string(),
        transcript: neutral_words(600),
    };
    let outcome = chain.analyze(&request).await;
    assert_eq!(outcome.payload["score"].as_f64(), Some(7.0));
}
