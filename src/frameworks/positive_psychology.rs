//! Positive psychology lens (Martin Seligman): strengths and well-being.

use super::{FrameworkLens, response_shape};
use crate::schemas::Domain;

pub struct PositivePsychology;

const EVIDENCE_FIELDS: &[&str] = &[
    "perma_elements",
    "character_strengths",
    "gratitude_practices",
    "optimism_building",
    "resilience_factors",
    "flourishing_indicators",
];

impl FrameworkLens for PositivePsychology {
    fn name(&self) -> &'static str {
        "positive_psychology"
    }

    fn theorist(&self) -> &'static str {
        "Martin Seligman"
    }

    fn domain(&self) -> Domain {
        Domain::StrengthsWellbeing
    }

    fn context(&self) -> &'static str {
        "Martin Seligman's positive psychology approach"
    }

    fn evidence_fields(&self) -> &'static [&'static str] {
        EVIDENCE_FIELDS
    }

    fn prompt(&self, transcript: &str) -> String {
        format!(
            "Analyze this therapy session transcript using Martin Seligman's positive psychology\n\
             principles.\n\
             \n\
             MARTIN SELIGMAN (b. 1942) shifted the focus from pathology to strengths and\n\
             well-being. Key frameworks:\n\
             - PERMA-V: Positive emotions, Engagement (flow, signature strengths), Relationships,\n\
               Meaning, Achievement, Vitality\n\
             - VIA character strengths across six virtues (wisdom, courage, humanity, justice,\n\
               temperance, transcendence)\n\
             - Learned optimism: explanatory style along permanent/temporary, pervasive/specific,\n\
               personal/external dimensions\n\
             - Resilience, post-traumatic growth, and flourishing vs. languishing\n\
             \n\
             Evaluate this session for:\n\
             1. PERMA-V elements present and developed\n\
             2. Character strengths identified and used\n\
             3. Gratitude and appreciation practices\n\
             4. Optimistic explanatory style development\n\
             5. Resilience building and coping resources\n\
             6. Meaning, purpose, and positive relationships\n\
             7. Overall well-being and flourishing indicators\n\
             \n\
             Rate the session on a scale of 1-10 for strengths and well-being focus.\n\
             \n\
             Transcript: {transcript}\n\
             \n\
             {shape}",
            transcript = transcript,
            shape = response_shape(EVIDENCE_FIELDS),
        )
    }
}
