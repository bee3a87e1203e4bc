//! The four validity lenses over a session transcript.
//!
//! Content, construct, and face validity are keyword-coverage ratios.
//! Criterion validity would need external outcome data to score, so it is a
//! configured constant.

use crate::heuristics::{Check, check_ratio_score};
use crate::schemas::{ValidityAssessment, band_for};

const CONTENT_CHECKS: [Check; 5] = [
    Check::any("presenting_problem", &["problem", "issue", "concern"]),
    Check::any("emotional_content", &["feel", "emotion", "mood"]),
    Check::any("behavioral_content", &["do", "behave", "action"]),
    Check::any("cognitive_content", &["think", "thought", "believe"]),
    Check::any("interpersonal_content", &["relationship", "social", "people"]),
];

const CONSTRUCT_CHECKS: [Check; 5] = [
    Check::any("therapeutic_alliance", &["alliance", "rapport", "connection"]),
    Check::any("symptom_assessment", &["symptom", "problem", "difficulty"]),
    Check::any("functional_assessment", &["function", "daily", "work", "social"]),
    Check::any("progress_assessment", &["progress", "change", "improvement"]),
    Check::any("insight_assessment", &["insight", "understand", "realize"]),
];

const FACE_CHECKS: [Check; 4] = [
    Check::any("therapeutic_content", &["therapy", "counseling", "treatment"]),
    Check::any("clinical_language", &["assess", "evaluate", "clinical", "therapeutic"]),
    Check::any("professional_interaction", &["professional", "counselor", "therapist"]),
    Check::any("therapeutic_goals", &["goal", "objective", "outcome"]),
];

/// Score all four lenses and band the average
pub(crate) fn assess_validity(text: &str, criterion_validity: f64) -> ValidityAssessment {
    let content = check_ratio_score(text, &CONTENT_CHECKS);
    let construct = check_ratio_score(text, &CONSTRUCT_CHECKS);
    let face = check_ratio_score(text, &FACE_CHECKS);
    let overall = (content + construct + criterion_validity + face) / 4.0;

    ValidityAssessment {
        overall,
        level: band_for(overall),
        content,
        construct,
        criterion: criterion_validity,
        face,
    }
}
