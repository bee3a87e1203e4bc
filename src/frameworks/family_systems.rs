//! Family systems lens (Virginia Satir): communication and role changes.

use super::{FrameworkLens, response_shape};
use crate::schemas::Domain;

pub struct FamilySystems;

const EVIDENCE_FIELDS: &[&str] = &[
    "communication_patterns",
    "communication_stances",
    "family_roles",
    "self_worth_issues",
    "boundary_issues",
    "intergenerational_patterns",
    "systems_insights",
    "congruent_communication",
];

impl FrameworkLens for FamilySystems {
    fn name(&self) -> &'static str {
        "family_systems"
    }

    fn theorist(&self) -> &'static str {
        "Virginia Satir"
    }

    fn domain(&self) -> Domain {
        Domain::CommunicationChanges
    }

    fn context(&self) -> &'static str {
        "Virginia Satir's family systems approach"
    }

    fn evidence_fields(&self) -> &'static [&'static str] {
        EVIDENCE_FIELDS
    }

    fn prompt(&self, transcript: &str) -> String {
        format!(
            "Analyze this therapy session transcript using Virginia Satir's family systems\n\
             approach.\n\
             \n\
             VIRGINIA SATIR (1916-1988), pioneer of family therapy: the family as a system where\n\
             change in one member affects all others; four survival stances under threat\n\
             (placater, blamer, super-reasonable, irrelevant) against congruent communication\n\
             that matches inner feeling with outer expression; spoken and unspoken family roles\n\
             and rules; self-worth as the core issue in family interaction; intergenerational\n\
             patterns; circular causality where problems maintain themselves; a growth model\n\
             focused on potential and resources rather than pathology.\n\
             \n\
             Evaluate this session for:\n\
             1. Communication patterns and styles (congruent vs. survival stances)\n\
             2. Family role dynamics and rules\n\
             3. Self-worth issues affecting relationships\n\
             4. Boundary issues and subsystem problems\n\
             5. Intergenerational patterns and their impact\n\
             6. Systems thinking and circular causality\n\
             7. Movement toward healthier communication\n\
             \n\
             Rate the session on a scale of 1-10 for communication and family role changes.\n\
             \n\
             Transcript: {transcript}\n\
             \n\
             {shape}",
            transcript = transcript,
            shape = response_shape(EVIDENCE_FIELDS),
        )
    }
}
