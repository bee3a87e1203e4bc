//! Score adjustment driven by detected red flags.
//!
//! A fixed penalty matrix maps each pattern category onto the domains it
//! undermines. Penalties are applied one matrix row at a time, scaled by the
//! detected severity, with the 1.0 floor re-applied after every single
//! adjustment. The per-step clamp is load-bearing: summing penalties first
//! and clamping once can produce a different final score for domains hit by
//! several categories, so the sequential order is part of the contract.

use crate::schemas::{Domain, DomainScoreSet, PatternCategory, PatternReport};

const SCORE_FLOOR: f64 = 1.0;

/// Base penalties per detected category, applied in declaration order
const PENALTY_MATRIX: &[(PatternCategory, &[(Domain, f64)])] = &[
    (
        PatternCategory::TherapeuticAlliance,
        &[
            (Domain::EmotionalSafety, -3.0),
            (Domain::CommunicationChanges, -2.0),
        ],
    ),
    (
        PatternCategory::EmotionalDeterioration,
        &[
            (Domain::StrengthsWellbeing, -3.0),
            (Domain::EmotionalSafety, -2.5),
            (Domain::BehavioralActivation, -2.0),
        ],
    ),
    (
        PatternCategory::ResistancePatterns,
        &[
            (Domain::CognitiveRestructuring, -2.5),
            (Domain::BehavioralActivation, -2.0),
        ],
    ),
    (
        PatternCategory::TherapeuticRupture,
        &[
            (Domain::EmotionalSafety, -3.5),
            (Domain::CommunicationChanges, -2.5),
            (Domain::UnconsciousPatterns, -2.0),
        ],
    ),
    (
        PatternCategory::StagnationSigns,
        &[
            (Domain::NarrativeCoherence, -2.0),
            (Domain::BehavioralActivation, -2.5),
            (Domain::CognitiveRestructuring, -1.5),
        ],
    ),
];

/// Apply severity-weighted penalties to the raw scores.
///
/// Pure function of its inputs: identical (raw, patterns) always yields an
/// identical adjusted set, and an empty report returns the raw scores
/// unchanged.
pub fn adjust_for_negative_patterns(
    raw: &DomainScoreSet,
    patterns: &PatternReport,
) -> DomainScoreSet {
    let mut adjusted = raw.clone();

    for (category, penalties) in PENALTY_MATRIX {
        let Some(finding) = patterns.get(category) else {
            continue;
        };
        for (domain, base_penalty) in *penalties {
            let current = adjusted.get(*domain);
            let next = (current + base_penalty * finding.severity).max(SCORE_FLOOR);
            adjusted.set(*domain, next);
        }
    }

    adjusted
}
