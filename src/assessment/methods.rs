//! The four assessment methods applied to every transcript.
//!
//! All scoring here is keyword counting over lower-cased text: weighted
//! occurrence counts for the interview proxies, boolean check ratios for
//! coverage and observation. Keyword lists match therapeutic assessment
//! usage, substring-matched without word boundaries.

use crate::heuristics::{Check, check_ratio_score, contains_any, weighted_occurrence_score};

/// Score plus its qualitative tier, used for cross-method convergence
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeveledScore {
    pub score: f64,
    pub level: &'static str,
}

pub(crate) fn tier(score: f64) -> &'static str {
    if score >= 7.0 {
        "high"
    } else if score >= 4.0 {
        "moderate"
    } else {
        "low"
    }
}

fn leveled(score: f64) -> LeveledScore {
    LeveledScore {
        score,
        level: tier(score),
    }
}

// ---------------------------------------------------------------------------
// Unstructured clinical interview proxies

const RAPPORT_GROUPS: [&[&str]; 4] = [
    &["understand", "feel", "hear you", "that sounds", "i can see"],
    &["valid", "understandable", "makes sense", "appreciate"],
    &["we", "together", "with you", "our work"],
    &["care", "support", "here for you", "safe"],
];

const DEPTH_GROUPS: [&[&str]; 4] = [
    &["how", "what", "tell me", "describe", "explain"],
    &["feel", "emotion", "feeling", "experience"],
    &["pattern", "usually", "often", "tend to"],
    &["mean", "significant", "important", "realize"],
];

const OPENNESS_GROUPS: [&[&str]; 4] = [
    &["i feel", "i think", "i believe", "i experience"],
    &["difficult", "hard", "struggle", "vulnerable"],
    &["realize", "understand", "see now", "learned"],
    &["sad", "happy", "angry", "anxious", "excited", "frustrated"],
];

const THEME_PATTERNS: [(&str, &[&str]); 8] = [
    ("relationship_issues", &["relationship", "partner", "family", "friend", "connect"]),
    ("emotional_regulation", &["emotion", "feeling", "regulate", "control", "manage"]),
    ("trauma_processing", &["trauma", "abuse", "hurt", "pain", "past"]),
    ("self_esteem", &["self", "worth", "value", "confidence", "esteem"]),
    ("anxiety_depression", &["anxious", "worried", "sad", "depressed", "down"]),
    ("coping_skills", &["cope", "manage", "deal with", "handle", "strategy"]),
    ("life_transitions", &["change", "transition", "new", "different", "moving"]),
    ("identity_issues", &["identity", "who am i", "purpose", "meaning", "role"]),
];

const TECHNIQUE_PATTERNS: [(&str, &[&str]); 8] = [
    ("active_listening", &["i hear", "sounds like", "what i'm hearing"]),
    ("reflection", &["reflect", "mirror", "seems like you"]),
    ("reframing", &["another way", "different perspective", "reframe"]),
    ("summarizing", &["so what i'm hearing", "to summarize", "let me recap"]),
    ("questioning", &["what", "how", "when", "where", "why", "tell me more"]),
    ("validation", &["valid", "understandable", "makes sense", "normal"]),
    ("interpretation", &["seems like", "appears that", "wonder if"]),
    ("psychoeducation", &["education", "explain", "information", "learn about"]),
];

#[derive(Debug, Clone)]
pub(crate) struct UnstructuredInterview {
    pub rapport: LeveledScore,
    pub exploration_depth: LeveledScore,
    pub client_openness: LeveledScore,
    pub therapeutic_themes: Vec<&'static str>,
    pub counselor_techniques: Vec<&'static str>,
}

pub(crate) fn analyze_unstructured(text: &str) -> UnstructuredInterview {
    UnstructuredInterview {
        rapport: leveled(weighted_occurrence_score(text, &RAPPORT_GROUPS, 0.5)),
        exploration_depth: leveled(weighted_occurrence_score(text, &DEPTH_GROUPS, 0.3)),
        client_openness: leveled(weighted_occurrence_score(text, &OPENNESS_GROUPS, 0.4)),
        therapeutic_themes: THEME_PATTERNS
            .iter()
            .filter(|(_, phrases)| contains_any(text, phrases))
            .map(|(name, _)| *name)
            .collect(),
        counselor_techniques: TECHNIQUE_PATTERNS
            .iter()
            .filter(|(_, phrases)| contains_any(text, phrases))
            .map(|(name, _)| *name)
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Structured interview: systematic coverage of six topic areas

const PRESENTING_PROBLEM: [Check; 5] = [
    Check::any("problem_description", &["problem", "issue", "concern", "difficult"]),
    Check::any("symptom_details", &["symptom", "experience", "feel", "happen"]),
    Check::any("onset_timing", &["when", "started", "began", "first time"]),
    Check::any("severity_impact", &["severe", "mild", "impact", "affect", "interfere"]),
    Check::any("frequency_duration", &["often", "frequency", "how long", "duration"]),
];

const SYMPTOM_ASSESSMENT: [Check; 5] = [
    Check::any("cognitive_symptoms", &["think", "thought", "memory", "concentrate"]),
    Check::any("emotional_symptoms", &["feel", "emotion", "mood", "affect"]),
    Check::any("behavioral_symptoms", &["do", "behave", "action", "activity"]),
    Check::any("somatic_symptoms", &["body", "physical", "sleep", "eat", "energy"]),
    Check::any("interpersonal_symptoms", &["relationship", "social", "interact", "people"]),
];

const FUNCTIONAL_IMPACT: [Check; 5] = [
    Check::any("work_functioning", &["work", "job", "career", "employment"]),
    Check::any("relationship_functioning", &["relationship", "family", "friend", "social"]),
    Check::any("self_care", &["self care", "hygiene", "health", "eating"]),
    Check::any("daily_activities", &["daily", "routine", "activities", "function"]),
    Check::any("recreational_activities", &["hobbies", "fun", "recreation", "enjoy"]),
];

const RISK_ASSESSMENT: [Check; 5] = [
    Check::any("self_harm_risk", &["hurt myself", "self harm", "suicide", "die"]),
    Check::any("substance_use", &["alcohol", "drug", "substance", "drinking"]),
    Check::any("violence_risk", &["violent", "hurt others", "anger", "rage"]),
    Check::any("impulsivity", &["impulsive", "reckless", "dangerous", "risky"]),
    Check::any("social_support", &["support", "family", "friends", "help"]),
];

const STRENGTHS_ASSESSMENT: [Check; 5] = [
    Check::any("coping_skills", &["cope", "manage", "handle", "strategy"]),
    Check::any("resilience", &["resilient", "strong", "overcome", "survive"]),
    Check::any("insight", &["understand", "realize", "aware", "insight"]),
    Check::any("motivation", &["motivated", "want to", "goal", "change"]),
    Check::any("social_support", &["support", "family", "friends", "help"]),
];

const TREATMENT_GOALS: [Check; 5] = [
    Check::any("goals_discussed", &["goal", "objective", "want to", "hope to"]),
    Check::any("specific_targets", &["specific", "particular", "focus on"]),
    Check::any("measurable_outcomes", &["measure", "track", "progress", "improve"]),
    Check::any("realistic_expectations", &["realistic", "achievable", "possible"]),
    Check::any("client_motivation", &["motivated", "committed", "ready"]),
];

const COVERAGE_AREAS: [(&str, &[Check; 5]); 6] = [
    ("presenting_problem", &PRESENTING_PROBLEM),
    ("symptom_assessment", &SYMPTOM_ASSESSMENT),
    ("functional_impact", &FUNCTIONAL_IMPACT),
    ("risk_assessment", &RISK_ASSESSMENT),
    ("strengths_assessment", &STRENGTHS_ASSESSMENT),
    ("treatment_goals", &TREATMENT_GOALS),
];

#[derive(Debug, Clone)]
pub(crate) struct StructuredCoverage {
    pub area_scores: Vec<(&'static str, f64)>,
    pub completeness: f64,
}

pub(crate) fn analyze_structured(text: &str) -> StructuredCoverage {
    let area_scores: Vec<(&'static str, f64)> = COVERAGE_AREAS
        .iter()
        .map(|(name, checks)| (*name, check_ratio_score(text, *checks)))
        .collect();
    let completeness =
        area_scores.iter().map(|(_, s)| s).sum::<f64>() / area_scores.len() as f64;
    StructuredCoverage {
        area_scores,
        completeness,
    }
}

// ---------------------------------------------------------------------------
// Behavioral observation proxies

const ENGAGEMENT_CHECKS: [Check; 4] = [
    Check::any("emotional_expression", &["feel", "emotion", "excited", "sad", "happy"]),
    Check::any("question_asking", &["what", "how", "why", "can you", "do you think"]),
    Check::any("active_participation", &["yes", "right", "exactly", "that's true"]),
    Check::any("personal_sharing", &["i ", "me", "my", "personally"]),
];

const REGULATION_CHECKS: [Check; 5] = [
    Check::any("emotion_awareness", &["feel", "emotion", "aware of", "notice"]),
    Check::any("regulation_strategies", &["cope", "manage", "control", "regulate"]),
    Check::none("emotional_stability", &["overwhelmed", "out of control", "intense"]),
    Check::any("adaptive_responses", &["healthy", "positive", "adaptive", "helpful"]),
    Check::any("emotional_expression", &["express", "share", "communicate", "tell"]),
];

const COMMUNICATION_CHECKS: [Check; 5] = [
    Check::any("clear_expression", &["clear", "understand", "explain", "describe"]),
    Check::any("assertiveness", &["i need", "i want", "i think", "i believe"]),
    Check::any("active_listening", &["i hear", "understand", "listening"]),
    Check::any("nonverbal_awareness", &["body", "gesture", "tone", "expression"]),
    Check::any("empathy", &["understand", "feel", "empathy", "compassion"]),
];

const DEFENSIVE_CHECKS: [Check; 5] = [
    Check::any("denial", &["not really", "not true", "don't think so"]),
    Check::any("minimization", &["not that bad", "minor", "small", "just"]),
    Check::any("deflection", &["change topic", "anyway", "whatever", "but"]),
    Check::any("intellectualization", &["theory", "research", "generally", "typically"]),
    Check::any("resistance", &["don't want", "won't", "refuse", "can't"]),
];

const ALLIANCE_CHECKS: [Check; 5] = [
    Check::any("collaboration", &["together", "we", "our", "work with"]),
    Check::any("trust", &["trust", "safe", "comfortable", "open"]),
    Check::any("agreement", &["agree", "yes", "right", "exactly"]),
    Check::any("respect", &["respect", "appreciate", "value"]),
    Check::any("connection", &["connect", "understand", "relate", "feel"]),
];

#[derive(Debug, Clone)]
pub(crate) struct BehavioralObservation {
    pub engagement: LeveledScore,
    pub emotional_regulation: f64,
    pub communication_style: f64,
    pub defensiveness: f64,
    pub alliance: LeveledScore,
}

pub(crate) fn analyze_behavioral(text: &str) -> BehavioralObservation {
    // engagement counts a length check alongside the four phrase checks
    let mut passed = ENGAGEMENT_CHECKS.iter().filter(|c| c.passes(text)).count();
    if text.split_whitespace().count() > 100 {
        passed += 1;
    }
    let engagement_score = passed as f64 / (ENGAGEMENT_CHECKS.len() + 1) as f64 * 10.0;

    BehavioralObservation {
        engagement: leveled(engagement_score),
        emotional_regulation: check_ratio_score(text, &REGULATION_CHECKS),
        communication_style: check_ratio_score(text, &COMMUNICATION_CHECKS),
        defensiveness: check_ratio_score(text, &DEFENSIVE_CHECKS),
        alliance: leveled(check_ratio_score(text, &ALLIANCE_CHECKS)),
    }
}

// ---------------------------------------------------------------------------
// Therapeutic rating scales

const SESSION_IMPACT_CHECKS: [Check; 5] = [
    Check::any("insight_gained", &["realize", "understand", "see now", "learned"]),
    Check::any("emotional_processing", &["feel better", "relief", "process", "work through"]),
    Check::any("new_perspective", &["different", "new way", "perspective", "angle"]),
    Check::any("motivation_increased", &["motivated", "encouraged", "hopeful"]),
    Check::any("skills_learned", &["skill", "strategy", "technique", "tool"]),
];

const COMPETENCE_CHECKS: [Check; 5] = [
    Check::any("appropriate_techniques", &["reflect", "summarize", "explore", "validate"]),
    Check::none("professional_boundaries", &["my life", "i do this myself"]),
    Check::any("empathic_responses", &["understand", "feel", "hear", "see"]),
    Check::any("clinical_judgment", &["assess", "evaluate", "consider", "important"]),
    Check::none("ethical_practice", &["inappropriate", "unethical"]),
];

const PROGRESS_CHECKS: [Check; 5] = [
    Check::any("symptom_improvement", &["better", "improve", "less", "reduced"]),
    Check::any("increased_insight", &["realize", "understand", "aware", "see"]),
    Check::any("behavioral_changes", &["change", "different", "new", "started"]),
    Check::any("emotional_regulation", &["manage", "control", "cope", "regulate"]),
    Check::any("functional_improvement", &["work", "function", "daily", "better"]),
];

#[derive(Debug, Clone)]
pub(crate) struct RatingScales {
    pub therapeutic_alliance: f64,
    pub session_impact: LeveledScore,
    pub client_engagement: f64,
    pub therapist_competence: f64,
    pub progress_indicators: LeveledScore,
    pub overall: f64,
}

pub(crate) fn apply_rating_scales(text: &str, behavioral: &BehavioralObservation) -> RatingScales {
    let alliance = behavioral.alliance.score;
    let session_impact = check_ratio_score(text, &SESSION_IMPACT_CHECKS);
    let engagement = behavioral.engagement.score;
    let competence = check_ratio_score(text, &COMPETENCE_CHECKS);
    let progress = check_ratio_score(text, &PROGRESS_CHECKS);
    let overall = (alliance + session_impact + engagement + competence + progress) / 5.0;

    RatingScales {
        therapeutic_alliance: alliance,
        session_impact: leveled(session_impact),
        client_engagement: engagement,
        therapist_competence: competence,
        progress_indicators: leveled(progress),
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICH_SESSION: &str = "therapist: tell me more about how work has been. \
        i hear you, that sounds difficult and i can see you care about doing well. \
        client: i feel like i understand my patterns better now. i realize the \
        anxious thoughts often started when my workload changed. i want to keep \
        making progress on my goals and manage stress in a healthy way. \
        we can work on this together and track what helps.";

    #[test]
    fn rich_session_scores_every_proxy_above_zero() {
        let result = analyze_unstructured(RICH_SESSION);
        assert!(result.rapport.score > 0.0);
        assert!(result.exploration_depth.score > 0.0);
        assert!(result.client_openness.score > 0.0);
        assert!(!result.therapeutic_themes.is_empty());
        assert!(!result.counselor_techniques.is_empty());
    }

    #[test]
    fn proxy_scores_are_capped_at_ten() {
        let dense = RICH_SESSION.repeat(20);
        let result = analyze_unstructured(&dense);
        assert!(result.rapport.score <= 10.0);
        assert!(result.exploration_depth.score <= 10.0);
        assert!(result.client_openness.score <= 10.0);
    }

    #[test]
    fn coverage_is_ratio_of_topic_hits() {
        // hits exactly the five presenting-problem checks and little else
        let text = "the problem is a symptom i feel when it started, severe impact, often";
        let coverage = analyze_structured(text);
        let (name, score) = coverage.area_scores[0];
        assert_eq!(name, "presenting_problem");
        assert_eq!(score, 10.0);
    }

    #[test]
    fn empty_text_covers_nothing() {
        let coverage = analyze_structured("mango");
        assert_eq!(coverage.completeness, 0.0);
        let observation = analyze_behavioral("mango");
        assert_eq!(observation.communication_style, 0.0);
    }

    #[test]
    fn stability_check_is_inverted() {
        let calm = analyze_behavioral("i notice my feelings and manage them");
        let flooded = analyze_behavioral("i notice my feelings but i am overwhelmed and out of control");
        assert!(calm.emotional_regulation > flooded.emotional_regulation);
    }

    #[test]
    fn rating_overall_is_mean_of_five_scales() {
        let behavioral = analyze_behavioral(RICH_SESSION);
        let scales = apply_rating_scales(RICH_SESSION, &behavioral);
        let mean = (scales.therapeutic_alliance
            + scales.session_impact.score
            + scales.client_engagement
            + scales.therapist_competence
            + scales.progress_indicators.score)
            / 5.0;
        assert!((scales.overall - mean).abs() < 1e-9);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(tier(7.0), "high");
        assert_eq!(tier(6.9), "moderate");
        assert_eq!(tier(4.0), "moderate");
        assert_eq!(tier(3.9), "low");
    }
}
