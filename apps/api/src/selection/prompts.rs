// Prompt text for the role recommendation request.

use std::fmt::Write;

use crate::models::profile::Profile;

/// Instruction appended after the profile lines.
pub const RECOMMENDATION_INSTRUCTION: &str = "Based on these skills and interests, \
please analyze the information and recommend the best fit role for this person to lead \
in the team. Also, explain why you chose this role:";

/// Renders a profile as one labeled line per field (name, the six skills in
/// fixed order, passion) followed by the instruction sentence.
pub fn build_recommendation_prompt(profile: &Profile) -> String {
    let mut prompt = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(prompt, "Name: {}", profile.name);
    for (label, level) in profile.skills() {
        let _ = writeln!(prompt, "{label}: {level}");
    }
    let _ = writeln!(prompt, "Passion: {}", profile.passion);
    prompt.push_str(RECOMMENDATION_INSTRUCTION);
    prompt
}
