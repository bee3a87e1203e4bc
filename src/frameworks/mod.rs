//! The seven therapeutic framework lenses.
//!
//! Each lens pairs a theoretical orientation with one evaluation domain: it
//! builds the framework-specific prompt, declares the evidence fields its
//! result must carry, and the shared parser maps whatever payload the
//! provider chain produced into a well-formed `FrameworkAnalysis`. Missing
//! fields become empty lists, never errors, so the generic local-tier shape
//! flows through every lens unchanged.

pub mod behavioral;
pub mod cognitive;
pub mod family_systems;
pub mod narrative;
pub mod positive_psychology;
pub mod psychodynamic;
pub mod rogers;

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;

use crate::schemas::{Domain, EvidenceSection, FrameworkAnalysis};

pub trait FrameworkLens: Send + Sync {
    /// Stable identifier used as the key in detailed analysis maps
    fn name(&self) -> &'static str;

    /// Display label for the theorist(s) behind the framework
    fn theorist(&self) -> &'static str;

    /// The evaluation domain this lens scores
    fn domain(&self) -> Domain;

    /// Expertise framing handed to the provider as system context
    fn context(&self) -> &'static str;

    /// Evidence list fields the result shape declares. Order is the
    /// rendering order in dashboards and reports.
    fn evidence_fields(&self) -> &'static [&'static str];

    /// Build the full analysis prompt for a transcript
    fn prompt(&self, transcript: &str) -> String;
}

/// All lenses in pipeline order
pub static LENSES: Lazy<Vec<Arc<dyn FrameworkLens + Send + Sync>>> = Lazy::new(|| {
    vec![
        Arc::new(rogers::Rogers),
        Arc::new(psychodynamic::Psychodynamic),
        Arc::new(cognitive::Cognitive),
        Arc::new(family_systems::FamilySystems),
        Arc::new(positive_psychology::PositivePsychology),
        Arc::new(narrative::Narrative),
        Arc::new(behavioral::Behavioral),
    ]
});

/// Render the "respond in JSON" tail shared by every lens prompt
pub(crate) fn response_shape(fields: &[&str]) -> String {
    let mut shape = String::from("Respond in JSON format with:\n{\n    \"score\": <number 1-10>,\n");
    for field in fields {
        shape.push_str(&format!("    \"{}\": [\"specific examples from the transcript\"],\n", field));
    }
    shape.push_str("    \"areas_for_improvement\": [\"concrete suggestions\"]\n}");
    shape
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

fn coerce_score(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// Map a provider payload into the lens's declared result shape.
///
/// Every declared evidence field is present in the output, defaulted to an
/// empty list when the payload lacks it. A present score is clamped into
/// [1, 10]; a payload with no usable score at all records 0.0 so the domain
/// key still exists downstream.
pub fn parse_analysis(lens: &dyn FrameworkLens, payload: &Value) -> FrameworkAnalysis {
    let score = payload
        .get("score")
        .and_then(coerce_score)
        .map(|s| s.clamp(1.0, 10.0))
        .unwrap_or(0.0);

    let evidence = lens
        .evidence_fields()
        .iter()
        .map(|field| EvidenceSection {
            label: field.to_string(),
            items: string_list(payload, field),
        })
        .collect();

    FrameworkAnalysis {
        framework: lens.name().to_string(),
        theorist: lens.theorist().to_string(),
        domain: lens.domain(),
        score,
        evidence,
        areas_for_improvement: string_list(payload, "areas_for_improvement"),
        note: payload.get("note").and_then(|v| v.as_str()).map(|s| s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seven_lenses_cover_seven_distinct_domains() {
        let mut domains: Vec<Domain> = LENSES.iter().map(|l| l.domain()).collect();
        domains.sort();
        domains.dedup();
        assert_eq!(domains.len(), 7);
    }

    #[test]
    fn every_lens_prompt_embeds_the_transcript() {
        for lens in LENSES.iter() {
            let prompt = lens.prompt("UNIQUE-MARKER-TEXT");
            assert!(prompt.contains("UNIQUE-MARKER-TEXT"), "{} prompt", lens.name());
            assert!(prompt.contains("\"score\""), "{} prompt shape", lens.name());
        }
    }

    #[test]
    fn generic_payload_parses_without_framework_fields() {
        let lens = &LENSES[0];
        let payload = json!({
            "score": 6.5,
            "note": "local analysis"
        });
        let analysis = parse_analysis(lens.as_ref(), &payload);
        assert_eq!(analysis.score, 6.5);
        assert_eq!(analysis.evidence.len(), lens.evidence_fields().len());
        assert!(analysis.evidence.iter().all(|s| s.items.is_empty()));
        assert_eq!(analysis.note.as_deref(), Some("local analysis"));
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let lens = &LENSES[0];
        let high = parse_analysis(lens.as_ref(), &json!({"score": 14}));
        assert_eq!(high.score, 10.0);
        let low = parse_analysis(lens.as_ref(), &json!({"score": -2}));
        assert_eq!(low.score, 1.0);
    }

    #[test]
    fn string_scores_are_coerced() {
        let lens = &LENSES[0];
        let analysis = parse_analysis(lens.as_ref(), &json!({"score": "7.5"}));
        assert_eq!(analysis.score, 7.5);
    }

    #[test]
    fn missing_score_defaults_to_zero() {
        let lens = &LENSES[0];
        let analysis = parse_analysis(lens.as_ref(), &json!({"note": "broken payload"}));
        assert_eq!(analysis.score, 0.0);
    }

    #[test]
    fn declared_evidence_fields_are_picked_up() {
        let lens = &LENSES[0];
        let field = lens.evidence_fields()[0];
        let mut payload = json!({"score": 8});
        payload[field] = json!(["first example", "second example"]);
        let analysis = parse_analysis(lens.as_ref(), &payload);
        assert_eq!(analysis.evidence[0].items.len(), 2);
    }
}
