//! Cross-framework insight synthesis and the effectiveness verdict.
//!
//! The narrative half goes through the provider chain; when the chain's
//! payload is missing or malformed a fixed fallback takes over, and that
//! fallback is the one place degraded output stays pattern-aware: detected
//! red flags add an explicit warning insight and a discuss-with-therapist
//! recommendation. The verdict half is deterministic arithmetic over
//! adjusted scores and severities, independent of any provider.

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::providers::{AnalysisRequest, ProviderChain};
use crate::schemas::{
    DomainScoreSet, EffectivenessVerdict, FrameworkAnalysis, PatternReport, VerdictKind,
};
use crate::transcript::Transcript;

/// The narrative layers of an analysis result
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInsights {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub themes: Vec<String>,
    pub progress_indicators: Vec<String>,
}

/// Ask the chain to synthesize across all framework findings
pub async fn synthesize_insights(
    chain: &ProviderChain,
    transcript: &Transcript,
    detailed_analysis: &BTreeMap<String, FrameworkAnalysis>,
    patterns: &PatternReport,
) -> SessionInsights {
    let summary =
        serde_json::to_string_pretty(detailed_analysis).unwrap_or_else(|_| "{}".to_string());

    let prompt = format!(
        "Based on this comprehensive therapeutic analysis incorporating the expertise of Carl\n\
         Rogers, Sigmund Freud, Melanie Klein, Albert Ellis, Aaron Beck, Virginia Satir, and\n\
         Martin Seligman, provide overall insights and recommendations.\n\
         \n\
         Analysis Summary:\n\
         {summary}\n\
         \n\
         Synthesize findings across all frameworks to provide:\n\
         1. Key insights about the client's therapeutic progress\n\
         2. Specific recommendations for future sessions\n\
         3. Main themes that emerged across different approaches\n\
         4. Progress indicators to track over time\n\
         \n\
         Respond in JSON format with:\n\
         {{\n\
             \"insights\": [\"insight1\", \"insight2\", \"insight3\"],\n\
             \"recommendations\": [\"recommendation1\", \"recommendation2\", \"recommendation3\"],\n\
             \"themes\": [\"theme1\", \"theme2\", \"theme3\"],\n\
             \"progress_indicators\": [\"indicator1\", \"indicator2\", \"indicator3\"]\n\
         }}",
    );

    let outcome = chain
        .analyze(&AnalysisRequest {
            prompt,
            context: "a master therapist providing supervision and case consultation".to_string(),
            transcript: transcript.raw().to_string(),
        })
        .await;

    match parse_insights(&outcome.payload) {
        Some(insights) => insights,
        None => {
            debug!("synthesis payload from {} unusable, using fallback", outcome.provider);
            fallback_insights(patterns)
        }
    }
}

/// A payload counts as usable only when it actually carries insights
fn parse_insights(payload: &Value) -> Option<SessionInsights> {
    payload.get("insights")?.as_array()?;
    Some(SessionInsights {
        insights: string_list(payload, "insights"),
        recommendations: string_list(payload, "recommendations"),
        themes: string_list(payload, "themes"),
        progress_indicators: string_list(payload, "progress_indicators"),
    })
}

fn string_list(payload: &Value, field: &str) -> Vec<String> {
    payload
        .get(field)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Fixed fallback narrative, extended with explicit warnings when red flags
/// were detected.
pub fn fallback_insights(patterns: &PatternReport) -> SessionInsights {
    let mut insights =
        vec!["Session analysis completed with multiple therapeutic perspectives".to_string()];
    let mut recommendations =
        vec!["Continue working on identified areas for growth".to_string()];

    if !patterns.is_empty() {
        insights.push(
            "Warning signs detected in this session suggest therapy effectiveness may be reduced"
                .to_string(),
        );
        recommendations.push("Discuss these concerns openly with your therapist".to_string());
    }

    SessionInsights {
        insights,
        recommendations,
        themes: vec!["Therapeutic progress and self-exploration".to_string()],
        progress_indicators: vec!["Client engagement and insight development".to_string()],
    }
}

const CONCERNING_CONFIDENCE: f64 = 0.8;
const MIXED_CONFIDENCE: f64 = 0.6;
const POSITIVE_CONFIDENCE: f64 = 0.7;

/// Deterministic verdict from adjusted scores and detected severities.
/// Boundaries are inclusive on the score side: an average of exactly 3.0 is
/// concerning, exactly 5.0 is mixed.
pub fn effectiveness_verdict(
    adjusted: &DomainScoreSet,
    patterns: &PatternReport,
) -> EffectivenessVerdict {
    let average_score = adjusted.average();
    let average_severity = if patterns.is_empty() {
        0.0
    } else {
        patterns.values().map(|f| f.severity).sum::<f64>() / patterns.len() as f64
    };

    if average_score <= 3.0 || average_severity > 0.4 {
        EffectivenessVerdict {
            kind: VerdictKind::Concerning,
            message: format!(
                "Warning patterns and low domain scores (average {:.1}) suggest this therapy is not working well right now",
                average_score
            ),
            confidence: CONCERNING_CONFIDENCE,
        }
    } else if average_score <= 5.0 || average_severity > 0.2 {
        EffectivenessVerdict {
            kind: VerdictKind::Mixed,
            message: format!(
                "Progress is uneven (average {:.1}); some domains moved forward while warning signs temper the picture",
                average_score
            ),
            confidence: MIXED_CONFIDENCE,
        }
    } else {
        EffectivenessVerdict {
            kind: VerdictKind::Positive,
            message: format!(
                "The frameworks agree this was a productive session (average {:.1})",
                average_score
            ),
            confidence: POSITIVE_CONFIDENCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Domain, PatternCategory, PatternFinding};
    use serde_json::json;

    fn scores(value: f64) -> DomainScoreSet {
        let mut set = DomainScoreSet::new();
        for domain in Domain::ALL {
            set.set(domain, value);
        }
        set
    }

    fn patterns_with_severity(severity: f64) -> PatternReport {
        let mut report = PatternReport::new();
        report.insert(
            PatternCategory::StagnationSigns,
            PatternFinding {
                severity,
                indicators: vec!["no progress".to_string()],
            },
        );
        report
    }

    #[test]
    fn average_of_exactly_three_is_concerning() {
        let verdict = effectiveness_verdict(&scores(3.0), &PatternReport::new());
        assert_eq!(verdict.kind, VerdictKind::Concerning);
        assert_eq!(verdict.confidence, 0.8);
    }

    #[test]
    fn average_just_above_three_is_mixed() {
        let verdict = effectiveness_verdict(&scores(3.1), &PatternReport::new());
        assert_eq!(verdict.kind, VerdictKind::Mixed);
        assert_eq!(verdict.confidence, 0.6);
    }

    #[test]
    fn average_of_exactly_five_is_mixed() {
        let verdict = effectiveness_verdict(&scores(5.0), &PatternReport::new());
        assert_eq!(verdict.kind, VerdictKind::Mixed);
    }

    #[test]
    fn healthy_scores_without_patterns_are_positive() {
        let verdict = effectiveness_verdict(&scores(7.2), &PatternReport::new());
        assert_eq!(verdict.kind, VerdictKind::Positive);
        assert_eq!(verdict.confidence, 0.7);
    }

    #[test]
    fn high_severity_overrides_good_scores() {
        let verdict = effectiveness_verdict(&scores(8.0), &patterns_with_severity(0.41));
        assert_eq!(verdict.kind, VerdictKind::Concerning);
    }

    #[test]
    fn moderate_severity_downgrades_to_mixed() {
        let verdict = effectiveness_verdict(&scores(8.0), &patterns_with_severity(0.21));
        assert_eq!(verdict.kind, VerdictKind::Mixed);
        // severity of exactly 0.2 is not past the gate
        let verdict = effectiveness_verdict(&scores(8.0), &patterns_with_severity(0.2));
        assert_eq!(verdict.kind, VerdictKind::Positive);
    }

    #[test]
    fn parse_insights_requires_the_insights_field() {
        assert!(parse_insights(&json!({"score": 5})).is_none());
        let parsed = parse_insights(&json!({
            "insights": ["a"],
            "recommendations": ["b"],
            "themes": [],
            "progress_indicators": ["c", "d"]
        }))
        .unwrap();
        assert_eq!(parsed.insights, vec!["a"]);
        assert_eq!(parsed.progress_indicators.len(), 2);
    }

    #[test]
    fn fallback_is_pattern_aware() {
        let plain = fallback_insights(&PatternReport::new());
        assert_eq!(plain.insights.len(), 1);
        assert_eq!(plain.recommendations.len(), 1);

        let flagged = fallback_insights(&patterns_with_severity(0.3));
        assert_eq!(flagged.insights.len(), 2);
        assert!(flagged.insights[1].contains("Warning signs"));
        assert!(flagged.recommendations[1].contains("therapist"));
    }
}
