//! Resume document structures consumed by the scorer

use serde::{Deserialize, Serialize};

/// A structured resume as persisted by the resume builder.
///
/// Field names serialize in camelCase so documents saved by the browser
/// application load unchanged. Every field defaults, so a partial document
/// is still a valid `ResumeDocument`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,

    // Carried for completeness of the persisted document; not read by the scoring rules.
    pub certifications: Vec<Certification>,
    pub licenses: Vec<License>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub custom_sections: Vec<CustomSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub end_year: String,
    pub gpa: Option<String>,
    pub honors: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct License {
    pub name: String,
    pub issuer: String,
    pub number: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    pub title: String,
    pub items: Vec<String>,
}

/// Optional role and industry the resume is being tailored for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringContext {
    pub target_role: String,
    pub industry_focus: String,
}

impl ScoringContext {
    pub fn new(target_role: impl Into<String>, industry_focus: impl Into<String>) -> Self {
        Self {
            target_role: target_role.into(),
            industry_focus: industry_focus.into(),
        }
    }
}

impl PersonalInfo {
    /// The six contact fields counted towards personal completeness, labelled.
    pub fn scored_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("full name", self.full_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("location", self.location.as_str()),
            ("title", self.title.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
        ]
    }
}

impl ResumeDocument {
    /// Add a skill unless it is blank or already present.
    ///
    /// Comparison ignores surrounding whitespace and ASCII case. Returns `true`
    /// when the skill was added.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.has_skill(skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        let skill = skill.trim();
        self.skills
            .iter()
            .any(|existing| existing.trim().eq_ignore_ascii_case(skill))
    }

    /// Iterate every achievement across all experience entries.
    pub fn achievements(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|entry| entry.achievements.iter().map(String::as_str))
    }
}

/// Blank means empty after trimming whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
