//! Rule-based multi-method assessment engine.
//!
//! Re-analyzes the transcript through four assessment methods and four
//! validity lenses, then synthesizes reliability, convergence, and
//! limitations. Everything is keyword counting over the transcript itself,
//! so this engine works identically with zero configured providers.

mod methods;
mod validity;

use std::collections::BTreeMap;

use crate::config::AnalysisSettings;
use crate::schemas::{MultiMethodAssessment, ReliabilityAssessment, band_for};
use crate::transcript::Transcript;

use methods::{
    BehavioralObservation, RatingScales, StructuredCoverage, UnstructuredInterview,
    analyze_behavioral, analyze_structured, analyze_unstructured, apply_rating_scales,
};

/// One assessment method with its declared strengths, weaknesses, and
/// literature-derived reliability constant.
#[derive(Debug, Clone, Copy)]
pub struct MethodProfile {
    pub name: &'static str,
    pub display_name: &'static str,
    pub method_type: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub reliability: f64,
}

/// Catalog of the methods this engine applies, in application order
pub const METHODS: [MethodProfile; 4] = [
    MethodProfile {
        name: "unstructured_interview",
        display_name: "Unstructured Clinical Interview",
        method_type: "informal",
        strengths: &[
            "Fosters rapport building",
            "Flexible; can tailor to clients",
            "Provides in-depth information",
            "Holistic perspective",
        ],
        weaknesses: &[
            "Reliance on counselor's judgment",
            "Subject to counselor's bias",
            "Not standardized; lack of reliability",
            "Potential for misdiagnosis",
        ],
        reliability: 6.0,
    },
    MethodProfile {
        name: "structured_interview",
        display_name: "Structured Interview",
        method_type: "formal",
        strengths: &[
            "Improved reliability",
            "Ensures collection of specific information",
            "Standardized format",
        ],
        weaknesses: &[
            "Constrained to specific questions and format",
            "May inhibit in-depth exploration",
        ],
        reliability: 8.0,
    },
    MethodProfile {
        name: "behavioral_observation",
        display_name: "Behavioral Observation",
        method_type: "informal",
        strengths: &[
            "Provides perceptions of client's behavior",
            "Real-time assessment",
            "Non-verbal information",
        ],
        weaknesses: &[
            "Constrained by observer's relationship to client and setting",
            "Observer bias",
            "Context-dependent",
        ],
        reliability: 6.5,
    },
    MethodProfile {
        name: "therapeutic_rating_scales",
        display_name: "Therapeutic Rating Scales",
        method_type: "formal",
        strengths: &[
            "Quick and efficient",
            "Quantifiable data",
            "Standardized scoring",
        ],
        weaknesses: &[
            "Potential for rater bias",
            "Validity issues",
            "May miss nuanced information",
        ],
        reliability: 7.0,
    },
];

/// Run the full multi-method assessment over one transcript
pub fn conduct_assessment(
    transcript: &Transcript,
    settings: &AnalysisSettings,
) -> MultiMethodAssessment {
    let text = transcript.lower();

    let unstructured = analyze_unstructured(text);
    let structured = analyze_structured(text);
    let behavioral = analyze_behavioral(text);
    let ratings = apply_rating_scales(text, &behavioral);

    let (convergent_findings, divergent_findings) =
        assess_convergence(&unstructured, &structured, &behavioral, &ratings);
    let validity_strength = validity_strength(&convergent_findings, &divergent_findings);

    MultiMethodAssessment {
        methods_used: METHODS.iter().map(|m| m.name.to_string()).collect(),
        sources_consulted: vec!["session_transcript".to_string()],
        therapeutic_themes: unstructured
            .therapeutic_themes
            .iter()
            .map(|t| t.to_string())
            .collect(),
        counselor_techniques: unstructured
            .counselor_techniques
            .iter()
            .map(|t| t.to_string())
            .collect(),
        systematic_coverage: structured
            .area_scores
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect(),
        behavioral_observations: BTreeMap::from([
            ("engagement_level".to_string(), behavioral.engagement.score),
            ("emotional_regulation".to_string(), behavioral.emotional_regulation),
            ("communication_style".to_string(), behavioral.communication_style),
            ("defensive_behaviors".to_string(), behavioral.defensiveness),
            ("therapeutic_alliance".to_string(), behavioral.alliance.score),
        ]),
        scale_scores: BTreeMap::from([
            ("therapeutic_alliance_scale".to_string(), ratings.therapeutic_alliance),
            ("session_impact_scale".to_string(), ratings.session_impact.score),
            ("client_engagement_scale".to_string(), ratings.client_engagement),
            ("therapist_competence_scale".to_string(), ratings.therapist_competence),
            ("progress_indicators_scale".to_string(), ratings.progress_indicators.score),
        ]),
        overall_rating: ratings.overall,
        convergent_findings,
        divergent_findings,
        validity_strength,
        reliability: assess_reliability(),
        validity: validity::assess_validity(text, settings.criterion_validity),
        clinical_recommendations: clinical_recommendations(validity_strength),
        assessment_limitations: assessment_limitations(),
    }
}

/// Compare the same construct as seen by different methods. Agreement on
/// tier is a convergent finding; disagreement is recorded as divergent.
fn assess_convergence(
    unstructured: &UnstructuredInterview,
    structured: &StructuredCoverage,
    behavioral: &BehavioralObservation,
    ratings: &RatingScales,
) -> (BTreeMap<String, Vec<String>>, Vec<String>) {
    let mut convergent: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut divergent: Vec<String> = Vec::new();

    let comparisons = [
        (
            "therapeutic_alliance",
            "rapport (interview)",
            unstructured.rapport.level,
            "alliance (observation)",
            behavioral.alliance.level,
        ),
        (
            "client_engagement",
            "openness (interview)",
            unstructured.client_openness.level,
            "engagement (observation)",
            behavioral.engagement.level,
        ),
        (
            "assessment_coverage",
            "exploration depth (interview)",
            unstructured.exploration_depth.level,
            "systematic coverage (structured)",
            methods::tier(structured.completeness),
        ),
        (
            "treatment_progress",
            "session impact (rating scales)",
            ratings.session_impact.level,
            "progress indicators (rating scales)",
            ratings.progress_indicators.level,
        ),
    ];

    for (construct, first_label, first_level, second_label, second_level) in comparisons {
        if first_level == second_level {
            convergent.entry(construct.to_string()).or_default().push(format!(
                "{} and {} both read {}",
                first_label, second_label, first_level
            ));
        } else {
            divergent.push(format!(
                "{}: {} reads {} but {} reads {}",
                construct, first_label, first_level, second_label, second_level
            ));
        }
    }

    (convergent, divergent)
}

/// Share of agreeing comparisons scaled to 0..=10, defaulting to the
/// midpoint when there is nothing to compare.
fn validity_strength(
    convergent: &BTreeMap<String, Vec<String>>,
    divergent: &[String],
) -> f64 {
    let convergent_count: usize = convergent.values().map(|v| v.len()).sum();
    let divergent_count = divergent.len();
    if convergent_count + divergent_count == 0 {
        return 5.0;
    }
    (convergent_count as f64 / (convergent_count + divergent_count) as f64 * 10.0).min(10.0)
}

/// Mean of the reliability constants for the methods actually used
fn assess_reliability() -> ReliabilityAssessment {
    let overall =
        METHODS.iter().map(|m| m.reliability).sum::<f64>() / METHODS.len() as f64;
    ReliabilityAssessment {
        overall,
        level: band_for(overall),
        method_reliabilities: METHODS
            .iter()
            .map(|m| (m.name.to_string(), m.reliability))
            .collect(),
    }
}

fn clinical_recommendations(validity_strength: f64) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    if validity_strength >= 8.0 {
        recommendations.push(
            "Assessment findings show strong convergent validity - high confidence in results"
                .to_string(),
        );
        recommendations.push(
            "Continue with current therapeutic approach based on reliable assessment data"
                .to_string(),
        );
    } else if validity_strength >= 6.0 {
        recommendations.push(
            "Assessment findings show moderate convergent validity - reasonable confidence in results"
                .to_string(),
        );
        recommendations
            .push("Consider additional assessment methods to strengthen validity".to_string());
    } else {
        recommendations.push(
            "Assessment findings show limited convergent validity - use caution in interpretation"
                .to_string(),
        );
        recommendations.push(
            "Recommend comprehensive re-assessment using multiple methods and sources".to_string(),
        );
    }

    recommendations.push(
        "Consider integrating multiple assessment sources for comprehensive evaluation".to_string(),
    );
    recommendations
        .push("Regular reassessment recommended to track therapeutic progress".to_string());
    recommendations
        .push("Document assessment limitations and reliability considerations".to_string());

    recommendations
}

fn assessment_limitations() -> Vec<String> {
    let mut limitations = vec![
        "Assessment based on a single session transcript - limited temporal scope".to_string(),
        "Lack of collateral sources limits comprehensive evaluation".to_string(),
        "Observer bias may influence interpretation of findings".to_string(),
    ];

    for method in &METHODS {
        for weakness in method.weaknesses.iter().take(2) {
            limitations.push(format!("{}: {}", method.display_name, weakness));
        }
    }

    limitations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(text: &str) -> Transcript {
        Transcript::new(text).unwrap()
    }

    #[test]
    fn methods_used_lists_all_four_in_order() {
        let assessment =
            conduct_assessment(&transcript("Client: fine."), &AnalysisSettings::default());
        assert_eq!(
            assessment.methods_used,
            vec![
                "unstructured_interview",
                "structured_interview",
                "behavioral_observation",
                "therapeutic_rating_scales"
            ]
        );
    }

    #[test]
    fn systematic_coverage_reports_six_topic_areas() {
        let assessment = conduct_assessment(
            &transcript("Client: the problem started at work."),
            &AnalysisSettings::default(),
        );
        assert_eq!(assessment.systematic_coverage.len(), 6);
        assert!(assessment.systematic_coverage.contains_key("risk_assessment"));
    }

    #[test]
    fn observation_and_rating_detail_is_surfaced() {
        let assessment = conduct_assessment(
            &transcript("Client: I feel we understand each other and I manage better now."),
            &AnalysisSettings::default(),
        );
        assert_eq!(assessment.behavioral_observations.len(), 5);
        assert_eq!(assessment.scale_scores.len(), 5);
        let mean: f64 = assessment.scale_scores.values().sum::<f64>() / 5.0;
        assert!((assessment.overall_rating - mean).abs() < 1e-9);
    }

    #[test]
    fn overall_reliability_is_mean_of_constants() {
        let reliability = assess_reliability();
        assert!((reliability.overall - 6.875).abs() < 1e-9);
        assert_eq!(reliability.level, crate::schemas::Band::Moderate);
        assert_eq!(reliability.method_reliabilities.len(), 4);
    }

    #[test]
    fn validity_strength_defaults_to_midpoint_with_no_comparisons() {
        assert_eq!(validity_strength(&BTreeMap::new(), &[]), 5.0);
    }

    #[test]
    fn validity_strength_is_convergent_share() {
        let mut convergent = BTreeMap::new();
        convergent.insert("alliance".to_string(), vec!["agrees".to_string()]);
        let divergent = vec!["engagement: split".to_string()];
        assert_eq!(validity_strength(&convergent, &divergent), 5.0);
        assert_eq!(validity_strength(&convergent, &[]), 10.0);
    }

    #[test]
    fn recommendations_branch_on_validity_strength() {
        let strong = clinical_recommendations(8.0);
        assert!(strong[0].contains("strong convergent validity"));
        let moderate = clinical_recommendations(6.7);
        assert!(moderate[0].contains("moderate convergent validity"));
        let weak = clinical_recommendations(3.3);
        assert!(weak[0].contains("limited convergent validity"));
        // the three fixed recommendations close out every variant
        for recs in [&strong, &moderate, &weak] {
            assert_eq!(recs.len(), 5);
            assert!(recs[4].contains("Document assessment limitations"));
        }
    }

    #[test]
    fn limitations_cover_generics_plus_two_per_method() {
        let limitations = assessment_limitations();
        assert_eq!(limitations.len(), 3 + 2 * METHODS.len());
        assert!(limitations[0].contains("single session transcript"));
        assert!(limitations[3].starts_with("Unstructured Clinical Interview:"));
    }

    #[test]
    fn assessment_is_deterministic() {
        let t = transcript("Client: I feel better and I understand my progress at work.");
        let settings = AnalysisSettings::default();
        let first = conduct_assessment(&t, &settings);
        let second = conduct_assessment(&t, &settings);
        assert_eq!(first, second);
    }
}
