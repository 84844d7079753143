//! Actionable recommendations derived from a score

use crate::processing::ats_scorer::{
    coverage_points, has_complete_education, has_substantive_achievement, has_titled_role,
    skills_points, starts_with_action_verb, summary_points, text_length, ScoreResult,
    ACHIEVEMENT_POINTS, ACTION_VERB_BONUS, EDUCATION_BONUS, INDUSTRY_FOCUS_POINTS,
    MAX_COVERAGE_POINTS, PERSONAL_WEIGHT, SKILLS_WEIGHT, SUMMARY_WEIGHT, TARGET_ROLE_POINTS,
    TITLED_ROLE_POINTS,
};
use crate::processing::document::{is_blank, ResumeDocument, ScoringContext};
use crate::processing::gap_analysis::find_near_match;
use crate::processing::keyword_corpus::{action_verbs, industries, industry_keywords};
use serde::{Deserialize, Serialize};

const TOP_MISSING_KEYWORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Larger potential gains rank higher.
    fn from_points(points: f64) -> Self {
        match points {
            p if p >= 15.0 => Priority::Critical,
            p if p >= 10.0 => Priority::High,
            p if p >= 5.0 => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeSection {
    Personal,
    Summary,
    Experience,
    Skills,
    Keywords,
    Education,
}

impl std::fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResumeSection::Personal => "Personal Details",
            ResumeSection::Summary => "Summary",
            ResumeSection::Experience => "Experience",
            ResumeSection::Skills => "Skills",
            ResumeSection::Keywords => "Keywords",
            ResumeSection::Education => "Education",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub section: ResumeSection,
    /// Points the change could add before the overall cap of 100.
    pub points_available: f64,
    pub actionable_steps: Vec<String>,
}

impl Recommendation {
    fn new(section: ResumeSection, points: f64, title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            priority: Priority::from_points(points),
            section,
            points_available: points,
            actionable_steps: Vec::new(),
        }
    }

    fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.actionable_steps = steps;
        self
    }
}

/// Recommendations for raising the score, most valuable first.
pub fn recommend(
    resume: &ResumeDocument,
    context: &ScoringContext,
    result: &ScoreResult,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    recommend_personal(resume, &mut recommendations);
    recommend_summary(resume, &mut recommendations);
    recommend_experience(resume, &mut recommendations);
    recommend_skills(resume, &mut recommendations);
    recommend_keywords(resume, context, result, &mut recommendations);
    recommend_bonuses(resume, &mut recommendations);

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}

fn recommend_personal(resume: &ResumeDocument, out: &mut Vec<Recommendation>) {
    let fields = resume.personal.scored_fields();
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(label, _)| *label)
        .collect();

    if missing.is_empty() {
        return;
    }

    let points = missing.len() as f64 / fields.len() as f64 * PERSONAL_WEIGHT;
    out.push(Recommendation::new(
        ResumeSection::Personal,
        points,
        "Complete your contact details",
        format!("Missing: {}", missing.join(", ")),
    ));
}

fn recommend_summary(resume: &ResumeDocument, out: &mut Vec<Recommendation>) {
    let points = SUMMARY_WEIGHT - summary_points(&resume.summary);
    if points <= 0.0 {
        return;
    }

    let (title, description) = if is_blank(&resume.summary) {
        (
            "Add a professional summary",
            "A summary of more than 150 characters earns full marks.".to_string(),
        )
    } else {
        (
            "Expand your summary",
            format!(
                "Your summary is {} characters; go past 150 for full marks.",
                text_length(&resume.summary)
            ),
        )
    };

    out.push(
        Recommendation::new(ResumeSection::Summary, points, title, description).with_steps(vec![
            "Open with your title and years of experience".to_string(),
            "Name two or three strengths relevant to the target role".to_string(),
        ]),
    );
}

fn recommend_experience(resume: &ResumeDocument, out: &mut Vec<Recommendation>) {
    if !has_titled_role(resume) {
        out.push(Recommendation::new(
            ResumeSection::Experience,
            TITLED_ROLE_POINTS,
            "Add a role with company and position",
            "At least one experience entry needs both a company and a position.".to_string(),
        ));
    }

    if !has_substantive_achievement(resume) {
        out.push(
            Recommendation::new(
                ResumeSection::Experience,
                ACHIEVEMENT_POINTS,
                "Describe concrete achievements",
                "List at least one achievement longer than a few words.".to_string(),
            )
            .with_steps(vec![
                "Quantify the outcome (percentages, revenue, time saved)".to_string(),
                "Keep each achievement to a single sentence".to_string(),
            ]),
        );
    }
}

fn recommend_skills(resume: &ResumeDocument, out: &mut Vec<Recommendation>) {
    let count = resume.skills.len();
    let points = SKILLS_WEIGHT - skills_points(count);
    if points <= 0.0 {
        return;
    }

    out.push(Recommendation::new(
        ResumeSection::Skills,
        points,
        "List more skills",
        format!("You list {} skills; 12 or more earns full marks.", count),
    ));
}

fn recommend_keywords(
    resume: &ResumeDocument,
    context: &ScoringContext,
    result: &ScoreResult,
    out: &mut Vec<Recommendation>,
) {
    if is_blank(&context.target_role) {
        out.push(Recommendation::new(
            ResumeSection::Keywords,
            TARGET_ROLE_POINTS,
            "Set a target role",
            "Scoring against a specific role earns keyword points.".to_string(),
        ));
    }

    if is_blank(&context.industry_focus) {
        out.push(Recommendation::new(
            ResumeSection::Keywords,
            INDUSTRY_FOCUS_POINTS,
            "Choose an industry focus",
            format!(
                "Pick one of: {}",
                industries().collect::<Vec<_>>().join(", ")
            ),
        ));
        return;
    }

    if result.missing_keywords.is_empty() {
        return;
    }

    let total = industry_keywords(&context.industry_focus).len();
    let matched = total.saturating_sub(result.missing_keywords.len());

    let top: Vec<&str> = result
        .missing_keywords
        .iter()
        .take(TOP_MISSING_KEYWORDS)
        .map(String::as_str)
        .collect();

    let steps = result
        .missing_keywords
        .iter()
        .filter_map(|keyword| {
            find_near_match(&resume.skills, keyword).map(|near| {
                format!("Rename \"{}\" to \"{}\"", near.skill, keyword)
            })
        })
        .collect();

    out.push(
        Recommendation::new(
            ResumeSection::Keywords,
            MAX_COVERAGE_POINTS - coverage_points(matched),
            "Add missing industry keywords",
            format!("{} keywords not found: {}", context.industry_focus, top.join(", ")),
        )
        .with_steps(steps),
    );
}

fn recommend_bonuses(resume: &ResumeDocument, out: &mut Vec<Recommendation>) {
    if resume.achievements().next().is_some() && !resume.achievements().any(starts_with_action_verb) {
        let examples: Vec<&str> = action_verbs()
            .iter()
            .filter_map(|set| set.terms.first().copied())
            .collect();
        out.push(Recommendation::new(
            ResumeSection::Experience,
            ACTION_VERB_BONUS,
            "Start achievements with action verbs",
            format!("Open at least one achievement with a verb such as {}.", examples.join(", ")),
        ));
    }

    if !has_complete_education(resume) {
        out.push(Recommendation::new(
            ResumeSection::Education,
            EDUCATION_BONUS,
            "Add an education entry",
            "Include at least one school together with the degree earned.".to_string(),
        ));
    }
}
