//! Behavioral activation lens: real-world application of session work.

use super::{FrameworkLens, response_shape};
use crate::schemas::Domain;

pub struct Behavioral;

const EVIDENCE_FIELDS: &[&str] = &[
    "behavioral_goals",
    "activity_planning",
    "behavioral_experiments",
    "real_world_applications",
    "action_commitments",
    "values_alignment",
    "avoidance_patterns",
    "environmental_factors",
];

impl FrameworkLens for Behavioral {
    fn name(&self) -> &'static str {
        "behavioral"
    }

    fn theorist(&self) -> &'static str {
        "Behavioral Therapy"
    }

    fn domain(&self) -> Domain {
        Domain::BehavioralActivation
    }

    fn context(&self) -> &'static str {
        "behavioral activation and action-oriented therapy"
    }

    fn evidence_fields(&self) -> &'static [&'static str] {
        EVIDENCE_FIELDS
    }

    fn prompt(&self, transcript: &str) -> String {
        format!(
            "Analyze this therapy session transcript for behavioral activation and real-life\n\
             application.\n\
             \n\
             BEHAVIORAL ACTIVATION PRINCIPLES: the connection between behavior, mood, and\n\
             thoughts; activity scheduling and behavioral experiments; values-based action and\n\
             meaningful engagement; breaking patterns of avoidance and withdrawal; mastery and\n\
             pleasure activities; goal setting with step-by-step progress; environmental\n\
             modification and context awareness.\n\
             \n\
             Evaluate this session for:\n\
             1. Behavioral goals and specific commitments made\n\
             2. Activity scheduling and planning discussions\n\
             3. Behavioral experiments designed or discussed\n\
             4. Real-world application of therapeutic insights\n\
             5. Action steps and follow-through strategies\n\
             6. Values-aligned behavior identification\n\
             7. Avoidance pattern recognition and intervention\n\
             8. Environmental factors and context\n\
             \n\
             Rate the session on a scale of 1-10 for behavioral activation and real-life\n\
             application.\n\
             \n\
             Transcript: {transcript}\n\
             \n\
             {shape}",
            transcript = transcript,
            shape = response_shape(EVIDENCE_FIELDS),
        )
    }
}
