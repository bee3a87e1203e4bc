//! Data model for analysis results.
//!
//! Everything here is created once per `analyze_session` call and never
//! mutated afterwards; the serde shapes are the contract consumed by
//! rendering, export, and storage layers downstream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The seven fixed therapeutic evaluation dimensions.
///
/// Every score set carries all seven keys; a missing domain is a bug, not a
/// representable state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    EmotionalSafety,
    UnconsciousPatterns,
    CognitiveRestructuring,
    CommunicationChanges,
    StrengthsWellbeing,
    NarrativeCoherence,
    BehavioralActivation,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::EmotionalSafety,
        Domain::UnconsciousPatterns,
        Domain::CognitiveRestructuring,
        Domain::CommunicationChanges,
        Domain::StrengthsWellbeing,
        Domain::NarrativeCoherence,
        Domain::BehavioralActivation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Domain::EmotionalSafety => "emotional_safety",
            Domain::UnconsciousPatterns => "unconscious_patterns",
            Domain::CognitiveRestructuring => "cognitive_restructuring",
            Domain::CommunicationChanges => "communication_changes",
            Domain::StrengthsWellbeing => "strengths_wellbeing",
            Domain::NarrativeCoherence => "narrative_coherence",
            Domain::BehavioralActivation => "behavioral_activation",
        }
    }
}

/// Scores for all seven domains. Constructed with every key present at 0.0
/// so a failed sub-analysis degrades to a zero, never to an absent entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainScoreSet(BTreeMap<Domain, f64>);

impl DomainScoreSet {
    pub fn new() -> Self {
        let mut scores = BTreeMap::new();
        for domain in Domain::ALL {
            scores.insert(domain, 0.0);
        }
        Self(scores)
    }

    pub fn get(&self, domain: Domain) -> f64 {
        self.0.get(&domain).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, domain: Domain, score: f64) {
        self.0.insert(domain, score);
    }

    pub fn average(&self) -> f64 {
        let sum: f64 = self.0.values().sum();
        sum / Domain::ALL.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (Domain, f64)> + '_ {
        self.0.iter().map(|(d, s)| (*d, *s))
    }
}

impl Default for DomainScoreSet {
    fn default() -> Self {
        Self::new()
    }
}

/// The five categories of therapeutic red flags scanned for in transcripts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    TherapeuticAlliance,
    EmotionalDeterioration,
    ResistancePatterns,
    TherapeuticRupture,
    StagnationSigns,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 5] = [
        PatternCategory::TherapeuticAlliance,
        PatternCategory::EmotionalDeterioration,
        PatternCategory::ResistancePatterns,
        PatternCategory::TherapeuticRupture,
        PatternCategory::StagnationSigns,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PatternCategory::TherapeuticAlliance => "therapeutic_alliance",
            PatternCategory::EmotionalDeterioration => "emotional_deterioration",
            PatternCategory::ResistancePatterns => "resistance_patterns",
            PatternCategory::TherapeuticRupture => "therapeutic_rupture",
            PatternCategory::StagnationSigns => "stagnation_signs",
        }
    }
}

/// One detected red-flag category. Severity is the matched share of the
/// category's indicator list, always within [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternFinding {
    pub severity: f64,
    pub indicators: Vec<String>,
}

/// Categories with at least one matched indicator. Categories with no match
/// are simply not present.
pub type PatternReport = BTreeMap<PatternCategory, PatternFinding>;

/// One labeled evidence list inside a framework analysis. The label set is
/// declared per framework; lists may be empty but are never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSection {
    pub label: String,
    pub items: Vec<String>,
}

/// Result of analyzing the session through one therapeutic framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkAnalysis {
    pub framework: String,
    pub theorist: String,
    pub domain: Domain,
    pub score: f64,
    pub evidence: Vec<EvidenceSection>,
    pub areas_for_improvement: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Three-tier banding shared by reliability and validity assessments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    High,
    Moderate,
    Low,
}

/// Banding thresholds are inclusive: exactly 7.5 is high, exactly 5.0 is
/// moderate.
pub fn band_for(score: f64) -> Band {
    if score >= 7.5 {
        Band::High
    } else if score >= 5.0 {
        Band::Moderate
    } else {
        Band::Low
    }
}

/// Reliability synthesis across the assessment methods actually applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityAssessment {
    pub overall: f64,
    pub level: Band,
    pub method_reliabilities: BTreeMap<String, f64>,
}

/// The four classic validity lenses, averaged into an overall figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityAssessment {
    pub overall: f64,
    pub level: Band,
    pub content: f64,
    pub construct: f64,
    pub criterion: f64,
    pub face: f64,
}

/// Output of the rule-based multi-method assessment engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiMethodAssessment {
    pub methods_used: Vec<String>,
    pub sources_consulted: Vec<String>,
    /// Major session themes surfaced by the unstructured-interview pass
    pub therapeutic_themes: Vec<String>,
    /// Counselor techniques recognized in the transcript
    pub counselor_techniques: Vec<String>,
    /// Coverage score per structured-interview topic area
    pub systematic_coverage: BTreeMap<String, f64>,
    /// Behavioral-observation proxy scores
    pub behavioral_observations: BTreeMap<String, f64>,
    /// The five therapeutic rating scales
    pub scale_scores: BTreeMap<String, f64>,
    /// Mean of the rating scales
    pub overall_rating: f64,
    pub convergent_findings: BTreeMap<String, Vec<String>>,
    pub divergent_findings: Vec<String>,
    pub validity_strength: f64,
    pub reliability: ReliabilityAssessment,
    pub validity: ValidityAssessment,
    pub clinical_recommendations: Vec<String>,
    pub assessment_limitations: Vec<String>,
}

/// Blunt overall read of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    Positive,
    Mixed,
    Concerning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessVerdict {
    pub kind: VerdictKind,
    pub message: String,
    pub confidence: f64,
}

/// The terminal artifact of one analysis run.
///
/// `domain_scores` is the adjusted generation; the raw pre-adjustment scores
/// are kept alongside so consumers can show what pattern detection changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub session_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub domain_scores: DomainScoreSet,
    pub raw_domain_scores: DomainScoreSet,
    pub detailed_analysis: BTreeMap<String, FrameworkAnalysis>,
    pub negative_patterns: PatternReport,
    pub multi_method: MultiMethodAssessment,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub session_themes: Vec<String>,
    pub progress_indicators: Vec<String>,
    pub effectiveness: EffectivenessVerdict,
}

impl AnalysisResult {
    /// Mean of the adjusted domain scores
    pub fn overall_score(&self) -> f64 {
        self.domain_scores.average()
    }

    /// Domains with the highest adjusted scores, best first
    pub fn strongest_domains(&self, count: usize) -> Vec<Domain> {
        let mut ranked: Vec<(Domain, f64)> = self.domain_scores.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.into_iter().take(count).map(|(d, _)| d).collect()
    }

    /// Domains with the lowest adjusted scores, weakest first
    pub fn weakest_domains(&self, count: usize) -> Vec<Domain> {
        let mut ranked: Vec<(Domain, f64)> = self.domain_scores.iter().collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.into_iter().take(count).map(|(d, _)| d).collect()
    }

    /// Compact summary for dashboards and reports
    pub fn progress_summary(&self) -> ProgressSummary {
        ProgressSummary {
            overall_score: self.overall_score(),
            strongest_domains: self.strongest_domains(3),
            weakest_domains: self.weakest_domains(3),
            key_themes: self.session_themes.iter().take(3).cloned().collect(),
            primary_recommendations: self.recommendations.iter().take(3).cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub overall_score: f64,
    pub strongest_domains: Vec<Domain>,
    pub weakest_domains: Vec<Domain>,
    pub key_themes: Vec<String>,
    pub primary_recommendations: Vec<String>,
}

/// A stored session handed back in for follow-up question answering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub transcript: String,
    pub analysis: AnalysisResult,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_set_starts_with_all_domains() {
        let scores = DomainScoreSet::new();
        assert_eq!(scores.iter().count(), 7);
        for domain in Domain::ALL {
            assert_eq!(scores.get(domain), 0.0);
        }
    }

    #[test]
    fn domain_serializes_to_snake_case_key() {
        let json = serde_json::to_string(&Domain::EmotionalSafety).unwrap();
        assert_eq!(json, "\"emotional_safety\"");
        for domain in Domain::ALL {
            let json = serde_json::to_string(&domain).unwrap();
            assert_eq!(json, format!("\"{}\"", domain.key()));
        }
    }

    #[test]
    fn banding_boundaries_are_inclusive() {
        assert_eq!(band_for(7.5), Band::High);
        assert_eq!(band_for(7.49), Band::Moderate);
        assert_eq!(band_for(5.0), Band::Moderate);
        assert_eq!(band_for(4.99), Band::Low);
    }

    #[test]
    fn strongest_and_weakest_rank_correctly() {
        let mut scores = DomainScoreSet::new();
        scores.set(Domain::EmotionalSafety, 9.0);
        scores.set(Domain::BehavioralActivation, 2.0);
        scores.set(Domain::CognitiveRestructuring, 6.0);
        let result = AnalysisResult {
            session_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            domain_scores: scores.clone(),
            raw_domain_scores: scores,
            detailed_analysis: BTreeMap::new(),
            negative_patterns: BTreeMap::new(),
            multi_method: MultiMethodAssessment {
                methods_used: vec![],
                sources_consulted: vec![],
                therapeutic_themes: vec![],
                counselor_techniques: vec![],
                systematic_coverage: BTreeMap::new(),
                behavioral_observations: BTreeMap::new(),
                scale_scores: BTreeMap::new(),
                overall_rating: 0.0,
                convergent_findings: BTreeMap::new(),
                divergent_findings: vec![],
                validity_strength: 5.0,
                reliability: ReliabilityAssessment {
                    overall: 5.0,
                    level: Band::Moderate,
                    method_reliabilities: BTreeMap::new(),
                },
                validity: ValidityAssessment {
                    overall: 5.0,
                    level: Band::Moderate,
                    content: 5.0,
                    construct: 5.0,
                    criterion: 7.0,
                    face: 5.0,
                },
                clinical_recommendations: vec![],
                assessment_limitations: vec![],
            },
            key_insights: vec![],
            recommendations: vec![],
            session_themes: vec![],
            progress_indicators: vec![],
            effectiveness: EffectivenessVerdict {
                kind: VerdictKind::Positive,
                message: String::new(),
                confidence: 0.7,
            },
        };
        assert_eq!(result.strongest_domains(1), vec![Domain::EmotionalSafety]);
        assert_eq!(result.weakest_domains(1), vec![Domain::BehavioralActivation]);
    }
}
