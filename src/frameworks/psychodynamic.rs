//! Psychodynamic lens (Freud and Klein): unconscious pattern emergence.

use super::{FrameworkLens, response_shape};
use crate::schemas::Domain;

pub struct Psychodynamic;

const EVIDENCE_FIELDS: &[&str] = &[
    "unconscious_patterns",
    "defense_mechanisms",
    "transference_indicators",
    "symbolic_content",
    "early_experience_connections",
    "object_relations_patterns",
    "unconscious_emergence",
];

impl FrameworkLens for Psychodynamic {
    fn name(&self) -> &'static str {
        "psychodynamic"
    }

    fn theorist(&self) -> &'static str {
        "Freud & Klein"
    }

    fn domain(&self) -> Domain {
        Domain::UnconsciousPatterns
    }

    fn context(&self) -> &'static str {
        "Freud and Klein's psychodynamic approach"
    }

    fn evidence_fields(&self) -> &'static [&'static str] {
        EVIDENCE_FIELDS
    }

    fn prompt(&self, transcript: &str) -> String {
        format!(
            "Analyze this therapy session transcript using psychodynamic principles from Sigmund\n\
             Freud and Melanie Klein.\n\
             \n\
             SIGMUND FREUD (1856-1939), founder of psychoanalysis: the unconscious mind drives\n\
             behavior and holds repressed material; defense mechanisms (repression, projection,\n\
             denial, displacement) protect the ego from anxiety; transference projects feelings\n\
             about past relationships onto the therapist; free association reveals unconscious\n\
             material; early childhood experiences shape personality.\n\
             \n\
             MELANIE KLEIN (1882-1960), pioneer of object relations: internalized relationships\n\
             with significant others, projective identification, the paranoid-schizoid and\n\
             depressive positions, splitting into all-good or all-bad, and the lasting impact of\n\
             the early mother-child relationship.\n\
             \n\
             Evaluate this session for:\n\
             1. Unconscious patterns and recurring themes\n\
             2. Defense mechanisms in operation\n\
             3. Transference manifestations\n\
             4. Symbolic content and metaphors revealing unconscious material\n\
             5. Early childhood experiences and their current impact\n\
             6. Object relations patterns\n\
             7. Signs of splitting or integration\n\
             8. Emergence of previously unconscious material into awareness\n\
             \n\
             Rate the session on a scale of 1-10 for unconscious pattern emergence and insight.\n\
             \n\
             Transcript: {transcript}\n\
             \n\
             {shape}",
            transcript = transcript,
            shape = response_shape(EVIDENCE_FIELDS),
        )
    }
}
