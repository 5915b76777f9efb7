use std::fmt;

use serde::{Deserialize, Serialize};

/// Self-rated proficiency for a single skill. Ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Novice,
    Competent,
    Proficient,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Novice => "Novice",
            SkillLevel::Competent => "Competent",
            SkillLevel::Proficient => "Proficient",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The area of work the person most wants to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Passion {
    Coding,
    #[serde(rename = "Documentation & Research")]
    DocumentationResearch,
    #[serde(rename = "Presentation & Communication")]
    PresentationCommunication,
}

impl Passion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Passion::Coding => "Coding",
            Passion::DocumentationResearch => "Documentation & Research",
            Passion::PresentationCommunication => "Presentation & Communication",
        }
    }
}

impl fmt::Display for Passion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission: a name, six skill ratings and a passion.
/// Built once from form input and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    pub project_management: SkillLevel,
    pub public_speaking: SkillLevel,
    pub ppt_development: SkillLevel,
    pub database_management: SkillLevel,
    pub coding: SkillLevel,
    pub deployment: SkillLevel,
    pub passion: Passion,
}

impl Profile {
    /// Skills paired with their display labels, in the fixed rendering order.
    pub fn skills(&self) -> [(&'static str, SkillLevel); 6] {
        [
            ("Project Management", self.project_management),
            ("Public Speaking", self.public_speaking),
            ("PPT/Story Development", self.ppt_development),
            ("Database Management", self.database_management),
            ("Coding", self.coding),
            ("Deployment", self.deployment),
        ]
    }
}

pub const NO_ROLE_RECOMMENDED: &str = "No specific role recommended";
pub const NO_EXPLANATION_PROVIDED: &str = "No explanation provided";

/// The (role, explanation) pair derived from one completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommended_role: String,
    pub explanation: String,
}

impl Default for Recommendation {
    fn default() -> Self {
        Self {
            recommended_role: NO_ROLE_RECOMMENDED.to_string(),
            explanation: NO_EXPLANATION_PROVIDED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_ordered() {
        assert!(SkillLevel::Novice < SkillLevel::Competent);
        assert!(SkillLevel::Competent < SkillLevel::Proficient);
        assert!(SkillLevel::Proficient < SkillLevel::Expert);
        let mut levels = [
            SkillLevel::Expert,
            SkillLevel::Novice,
            SkillLevel::Proficient,
            SkillLevel::Competent,
        ];
        levels.sort();
        assert_eq!(levels[0], SkillLevel::Novice);
        assert_eq!(levels[3], SkillLevel::Expert);
    }

    #[test]
    fn test_passion_serde_uses_display_names() {
        let json = serde_json::to_string(&Passion::DocumentationResearch).unwrap();
        assert_eq!(json, r#""Documentation & Research""#);

        let passion: Passion = serde_json::from_str(r#""Presentation & Communication""#).unwrap();
        assert_eq!(passion, Passion::PresentationCommunication);
        assert_eq!(passion.to_string(), "Presentation & Communication");
    }

    #[test]
    fn test_profile_deserializes_without_name() {
        let json = serde_json::json!({
            "project_management": "Expert",
            "public_speaking": "Novice",
            "ppt_development": "Competent",
            "database_management": "Proficient",
            "coding": "Expert",
            "deployment": "Novice",
            "passion": "Coding"
        });
        let profile: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.name, "");
        assert_eq!(profile.database_management, SkillLevel::Proficient);
    }

    #[test]
    fn test_profile_rejects_unknown_skill_level() {
        let json = serde_json::json!({
            "name": "Ada",
            "project_management": "Guru",
            "public_speaking": "Novice",
            "ppt_development": "Competent",
            "database_management": "Proficient",
            "coding": "Expert",
            "deployment": "Novice",
            "passion": "Coding"
        });
        assert!(serde_json::from_value::<Profile>(json).is_err());
    }

    #[test]
    fn test_recommendation_default_is_sentinels() {
        let rec = Recommendation::default();
        assert_eq!(rec.recommended_role, "No specific role recommended");
        assert_eq!(rec.explanation, "No explanation provided");
    }
}
