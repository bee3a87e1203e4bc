//! Person-centered lens (Carl Rogers): emotional safety and relational depth.

use super::{FrameworkLens, response_shape};
use crate::schemas::Domain;

pub struct Rogers;

const EVIDENCE_FIELDS: &[&str] = &[
    "empathy_evidence",
    "genuineness_indicators",
    "positive_regard_moments",
    "client_self_exploration",
    "emotional_safety_indicators",
    "self_acceptance_growth",
];

impl FrameworkLens for Rogers {
    fn name(&self) -> &'static str {
        "rogers"
    }

    fn theorist(&self) -> &'static str {
        "Carl Rogers"
    }

    fn domain(&self) -> Domain {
        Domain::EmotionalSafety
    }

    fn context(&self) -> &'static str {
        "Carl Rogers' person-centered therapy approach"
    }

    fn evidence_fields(&self) -> &'static [&'static str] {
        EVIDENCE_FIELDS
    }

    fn prompt(&self, transcript: &str) -> String {
        format!(
            "Analyze this therapy session transcript using Carl Rogers' person-centered approach.\n\
             \n\
             Carl Rogers (1902-1987) developed client-centered therapy around three core conditions\n\
             for therapeutic change:\n\
             1. UNCONDITIONAL POSITIVE REGARD: complete acceptance of the client without judgment\n\
             2. EMPATHY: deep understanding and reflection of the client's feelings and perspective\n\
             3. GENUINENESS/CONGRUENCE: therapist authenticity and realness in the relationship\n\
             \n\
             Additional Rogers principles: the client as expert on their own experience, focus on\n\
             present feelings, the self-actualization tendency, a non-directive stance where the\n\
             client leads, and the centrality of self-acceptance and self-worth.\n\
             \n\
             Evaluate this session for:\n\
             1. Evidence of therapist empathy and accurate reflection\n\
             2. Therapist genuineness and authenticity\n\
             3. Unconditional positive regard\n\
             4. Client self-exploration and self-discovery\n\
             5. Emotional safety allowing vulnerability\n\
             6. Client-centered focus vs. therapist-directed interventions\n\
             7. Signs of increased self-acceptance in the client\n\
             \n\
             Rate the session on a scale of 1-10 for emotional safety and relational depth.\n\
             \n\
             Transcript: {transcript}\n\
             \n\
             {shape}",
            transcript = transcript,
            shape = response_shape(EVIDENCE_FIELDS),
        )
    }
}
