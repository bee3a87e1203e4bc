//! Red-flag detection over session transcripts.
//!
//! Five categories of warning signs, each a fixed list of literal indicator
//! phrases. Detection is a pure function of the lower-cased transcript: a
//! category appears in the report only when at least one indicator matched,
//! severity is the matched share of its list, and the reported indicators
//! are the first five matches in list order.

use crate::heuristics::matched_phrases;
use crate::schemas::{PatternCategory, PatternFinding, PatternReport};
use crate::transcript::Transcript;

const MAX_REPORTED_INDICATORS: usize = 5;

pub(crate) fn indicators_for(category: PatternCategory) -> &'static [&'static str] {
    match category {
        PatternCategory::TherapeuticAlliance => &[
            "don't feel understood",
            "don't understand me",
            "not listening",
            "don't feel heard",
            "don't trust",
            "waste of time",
            "not helping",
            "pointless to talk",
            "feel judged",
            "can't open up",
        ],
        PatternCategory::EmotionalDeterioration => &[
            "hopeless",
            "getting worse",
            "falling apart",
            "can't cope",
            "no point anymore",
            "empty inside",
            "feel numb",
            "worthless",
            "can't go on",
            "crying all the time",
        ],
        PatternCategory::ResistancePatterns => &[
            "nothing works",
            "tried everything",
            "won't help",
            "don't want to talk",
            "what's the point",
            "why bother",
            "doesn't matter",
            "can't change",
            "give up",
            "not coming back",
        ],
        PatternCategory::TherapeuticRupture => &[
            "want to quit",
            "stop coming",
            "don't feel safe",
            "angry with you",
            "this isn't working",
            "done with therapy",
            "cancel my sessions",
            "you don't care",
            "can't be honest here",
        ],
        PatternCategory::StagnationSigns => &[
            "no progress",
            "same problems",
            "going in circles",
            "nothing has changed",
            "stuck in the same place",
            "every session is the same",
            "not getting anywhere",
            "treading water",
        ],
    }
}

/// Scan the transcript for all five categories
pub fn detect_negative_patterns(transcript: &Transcript) -> PatternReport {
    let text = transcript.lower();
    let mut report = PatternReport::new();

    for category in PatternCategory::ALL {
        let indicators = indicators_for(category);
        let matches = matched_phrases(text, indicators);
        if matches.is_empty() {
            continue;
        }
        report.insert(
            category,
            PatternFinding {
                severity: matches.len() as f64 / indicators.len() as f64,
                indicators: matches
                    .iter()
                    .take(MAX_REPORTED_INDICATORS)
                    .map(|m| m.to_string())
                    .collect(),
            },
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(text: &str) -> Transcript {
        Transcript::new(text).unwrap()
    }

    #[test]
    fn clean_transcript_yields_empty_report() {
        let t = transcript("Client: Things went well this week and I kept my routine.");
        assert!(detect_negative_patterns(&t).is_empty());
    }

    #[test]
    fn severity_is_matched_share_of_category_list() {
        let t = transcript("Client: I feel hopeless, like I am falling apart.");
        let report = detect_negative_patterns(&t);
        let finding = &report[&PatternCategory::EmotionalDeterioration];
        assert_eq!(finding.severity, 2.0 / 10.0);
        assert_eq!(finding.indicators, vec!["hopeless", "falling apart"]);
    }

    #[test]
    fn severity_stays_within_unit_interval() {
        let all_alliance = indicators_for(PatternCategory::TherapeuticAlliance).join(". ");
        let report = detect_negative_patterns(&transcript(&all_alliance));
        let finding = &report[&PatternCategory::TherapeuticAlliance];
        assert_eq!(finding.severity, 1.0);
        assert_eq!(finding.indicators.len(), 5);
    }

    #[test]
    fn indicators_follow_list_order_not_transcript_order() {
        let t = transcript("Client: I'm getting worse. Honestly I feel hopeless.");
        let report = detect_negative_patterns(&t);
        let finding = &report[&PatternCategory::EmotionalDeterioration];
        assert_eq!(finding.indicators, vec!["hopeless", "getting worse"]);
    }

    #[test]
    fn each_category_has_eight_to_ten_indicators() {
        for category in PatternCategory::ALL {
            let n = indicators_for(category).len();
            assert!((8..=10).contains(&n), "{:?} has {} indicators", category, n);
        }
    }
}
