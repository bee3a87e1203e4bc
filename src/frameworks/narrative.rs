//! Narrative lens: story coherence and identity development.

use super::{FrameworkLens, response_shape};
use crate::schemas::Domain;

pub struct Narrative;

const EVIDENCE_FIELDS: &[&str] = &[
    "narrative_coherence",
    "identity_themes",
    "life_meanings",
    "narrative_disruptions",
    "growth_indicators",
    "externalization_examples",
    "alternative_stories",
    "values_exploration",
];

impl FrameworkLens for Narrative {
    fn name(&self) -> &'static str {
        "narrative"
    }

    fn theorist(&self) -> &'static str {
        "Narrative Therapy"
    }

    fn domain(&self) -> Domain {
        Domain::NarrativeCoherence
    }

    fn context(&self) -> &'static str {
        "narrative therapy and identity development"
    }

    fn evidence_fields(&self) -> &'static [&'static str] {
        EVIDENCE_FIELDS
    }

    fn prompt(&self, transcript: &str) -> String {
        format!(
            "Analyze this therapy session transcript for narrative coherence and identity themes.\n\
             \n\
             NARRATIVE THERAPY PRINCIPLES: people are the experts of their own lives; problems are\n\
             separate from people (externalization); life stories can be re-authored; identity is\n\
             constructed through the stories we tell about ourselves; dominant stories vs.\n\
             alternative stories; unique outcomes that contradict problem-saturated stories;\n\
             preferred identity and values exploration.\n\
             \n\
             Evaluate this session for:\n\
             1. Story coherence and consistency in the client's narrative\n\
             2. Identity development and evolving self-concept\n\
             3. Life themes and meaning-making processes\n\
             4. Narrative disruptions or contradictions\n\
             5. Growth and change in the self-story\n\
             6. Externalization of problems from identity\n\
             7. Alternative stories and unique outcomes\n\
             8. Values and preferred identity exploration\n\
             \n\
             Rate the session on a scale of 1-10 for narrative coherence and identity development.\n\
             \n\
             Transcript: {transcript}\n\
             \n\
             {shape}",
            transcript = transcript,
            shape = response_shape(EVIDENCE_FIELDS),
        )
    }
}
