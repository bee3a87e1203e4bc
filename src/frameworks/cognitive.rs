//! Cognitive lens (Ellis and Beck): cognitive restructuring.

use super::{FrameworkLens, response_shape};
use crate::schemas::Domain;

pub struct Cognitive;

const EVIDENCE_FIELDS: &[&str] = &[
    "irrational_beliefs",
    "cognitive_distortions",
    "thought_challenging_examples",
    "behavioral_experiments",
    "abc_model_usage",
    "balanced_thinking_development",
    "coping_strategies",
];

impl FrameworkLens for Cognitive {
    fn name(&self) -> &'static str {
        "cognitive"
    }

    fn theorist(&self) -> &'static str {
        "Ellis & Beck"
    }

    fn domain(&self) -> Domain {
        Domain::CognitiveRestructuring
    }

    fn context(&self) -> &'static str {
        "Ellis and Beck's cognitive approaches"
    }

    fn evidence_fields(&self) -> &'static [&'static str] {
        EVIDENCE_FIELDS
    }

    fn prompt(&self, transcript: &str) -> String {
        format!(
            "Analyze this therapy session transcript using cognitive therapy principles from\n\
             Albert Ellis and Aaron Beck.\n\
             \n\
             ALBERT ELLIS (1913-2007), Rational Emotive Behavior Therapy: the A-B-C model\n\
             (activating event, beliefs, consequences), irrational beliefs driving emotional\n\
             disturbance, disputing beliefs through logical and empirical questioning,\n\
             unconditional self-acceptance, and homework to practice new thinking.\n\
             \n\
             AARON BECK (1921-2021), Cognitive Therapy: the cognitive triad of negative thoughts\n\
             about self, world, and future; cognitive distortions such as all-or-nothing thinking,\n\
             catastrophizing, and mind reading; automatic thoughts; cognitive restructuring through\n\
             evidence examination; behavioral experiments; collaborative empiricism.\n\
             \n\
             Evaluate this session for:\n\
             1. Identification of irrational beliefs and cognitive distortions\n\
             2. Evidence of disputing or challenging negative thoughts\n\
             3. Use of the A-B-C model or cognitive restructuring techniques\n\
             4. Behavioral experiments or homework assignments\n\
             5. Thought challenging and evidence examination\n\
             6. Movement from automatic thoughts to balanced thinking\n\
             7. Development of coping statements and rational beliefs\n\
             \n\
             Rate the session on a scale of 1-10 for cognitive restructuring effectiveness.\n\
             \n\
             Transcript: {transcript}\n\
             \n\
             {shape}",
            transcript = transcript,
            shape = response_shape(EVIDENCE_FIELDS),
        )
    }
}
