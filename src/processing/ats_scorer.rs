//! ATS (Applicant Tracking System) compatibility scoring
//!
//! Scores a structured resume out of 100 across five weighted categories:
//!
//! | Category   | Points | Rule                                                   |
//! |------------|--------|--------------------------------------------------------|
//! | personal   | 20     | share of six contact fields filled in                  |
//! | summary    | 15     | length tier of the summary                             |
//! | experience | 25     | 10 for a titled role, 15 for a substantive achievement |
//! | skills     | 20     | saturates at 12 skills                                 |
//! | keywords   | 20     | role and industry set, plus industry keyword coverage  |
//!
//! Two 5 point bonuses (achievement opening with an action verb, complete
//! education entry) are added on top and the total is capped at 100.
//!
//! Scoring is pure and total: any `ResumeDocument` yields a `ScoreResult`.

use crate::processing::document::{is_blank, PersonalInfo, ResumeDocument, ScoringContext};
use crate::processing::gap_analysis::keyword_coverage;
use crate::processing::keyword_corpus::all_action_verbs;
use crate::processing::keyword_matcher::KeywordScope;
use log::debug;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

pub const PERSONAL_WEIGHT: f64 = 20.0;
pub const SUMMARY_WEIGHT: f64 = 15.0;
pub const EXPERIENCE_WEIGHT: f64 = 25.0;
pub const SKILLS_WEIGHT: f64 = 20.0;
pub const KEYWORDS_WEIGHT: f64 = 20.0;

pub const ACTION_VERB_BONUS: f64 = 5.0;
pub const EDUCATION_BONUS: f64 = 5.0;

const PERSONAL_FIELD_COUNT: f64 = 6.0;
const SATURATING_SKILL_COUNT: f64 = 12.0;
const SATURATING_KEYWORD_MATCHES: f64 = 4.0;
pub(crate) const MAX_COVERAGE_POINTS: f64 = 10.0;
const MIN_ACHIEVEMENT_LENGTH: usize = 10;

pub(crate) const TITLED_ROLE_POINTS: f64 = 10.0;
pub(crate) const ACHIEVEMENT_POINTS: f64 = 15.0;
pub(crate) const TARGET_ROLE_POINTS: f64 = 5.0;
pub(crate) const INDUSTRY_FOCUS_POINTS: f64 = 5.0;

/// Tunable scoring behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    pub keyword_scope: KeywordScope,
    /// Cap the displayed skills percentage at 100. Off by default: more than
    /// 12 skills shows above 100 while the points still saturate at 20.
    pub clamp_skills_breakdown: bool,
}

/// Per-category percentages shown next to the overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub personal: u32,
    pub summary: u32,
    pub experience: u32,
    pub skills: u32,
    pub keywords: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// 0 – 100
    pub overall: u32,
    pub breakdown: ScoreBreakdown,
    /// Industry keywords not found in the resume, in corpus order.
    pub missing_keywords: Vec<String>,
}

/// Points earned in one category and the percentage displayed for it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CategoryScore {
    points: f64,
    percent: u32,
}

impl CategoryScore {
    fn of_weight(points: f64, weight: f64) -> Self {
        Self {
            points,
            percent: percent(points / weight),
        }
    }
}

fn percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().max(0.0) as u32
}

/// Compatibility scorer holding its options.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    options: ScoringOptions,
}

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ScoringOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    /// Score a resume against an optional role and industry.
    pub fn score(&self, resume: &ResumeDocument, context: &ScoringContext) -> ScoreResult {
        let personal = self.score_personal(&resume.personal);
        let summary = self.score_summary(&resume.summary);
        let experience = self.score_experience(resume);
        let skills = self.score_skills(resume);

        let coverage = keyword_coverage(resume, context, self.options.keyword_scope);
        let keywords = self.score_keywords(context, coverage.matched.len());

        let bonus = self.bonus_points(resume);

        let total = personal.points
            + summary.points
            + experience.points
            + skills.points
            + keywords.points
            + bonus;
        let overall = total.min(100.0).round().max(0.0) as u32;

        debug!(
            "Scored resume: overall={} personal={:.1} summary={:.1} experience={:.1} skills={:.1} keywords={:.1} bonus={:.1}",
            overall, personal.points, summary.points, experience.points, skills.points, keywords.points, bonus
        );

        ScoreResult {
            overall,
            breakdown: ScoreBreakdown {
                personal: personal.percent,
                summary: summary.percent,
                experience: experience.percent,
                skills: skills.percent,
                keywords: keywords.percent,
            },
            missing_keywords: coverage.missing.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn score_personal(&self, personal: &PersonalInfo) -> CategoryScore {
        let filled = personal
            .scored_fields()
            .iter()
            .filter(|(_, value)| !is_blank(value))
            .count() as f64;

        let fraction = filled / PERSONAL_FIELD_COUNT;
        CategoryScore {
            points: fraction * PERSONAL_WEIGHT,
            percent: percent(fraction),
        }
    }

    fn score_summary(&self, summary: &str) -> CategoryScore {
        CategoryScore::of_weight(summary_points(summary), SUMMARY_WEIGHT)
    }

    fn score_experience(&self, resume: &ResumeDocument) -> CategoryScore {
        let mut points = 0.0;
        if has_titled_role(resume) {
            points += TITLED_ROLE_POINTS;
        }
        if has_substantive_achievement(resume) {
            points += ACHIEVEMENT_POINTS;
        }
        CategoryScore::of_weight(points, EXPERIENCE_WEIGHT)
    }

    fn score_skills(&self, resume: &ResumeDocument) -> CategoryScore {
        let fraction = resume.skills.len() as f64 / SATURATING_SKILL_COUNT;
        let shown = if self.options.clamp_skills_breakdown {
            fraction.min(1.0)
        } else {
            fraction
        };

        CategoryScore {
            points: skills_points(resume.skills.len()),
            percent: percent(shown),
        }
    }

    fn score_keywords(&self, context: &ScoringContext, matched: usize) -> CategoryScore {
        let mut points = 0.0;
        if !is_blank(&context.target_role) {
            points += TARGET_ROLE_POINTS;
        }
        if !is_blank(&context.industry_focus) {
            points += INDUSTRY_FOCUS_POINTS;
        }
        points += coverage_points(matched);

        CategoryScore::of_weight(points, KEYWORDS_WEIGHT)
    }

    fn bonus_points(&self, resume: &ResumeDocument) -> f64 {
        let mut bonus = 0.0;
        if resume.achievements().any(starts_with_action_verb) {
            bonus += ACTION_VERB_BONUS;
        }
        if has_complete_education(resume) {
            bonus += EDUCATION_BONUS;
        }
        bonus
    }
}

/// Score with default options.
pub fn score(resume: &ResumeDocument, context: &ScoringContext) -> ScoreResult {
    CompatibilityScorer::new().score(resume, context)
}

/// Summary points by length tier: over 150 scores 15, over 50 scores 10,
/// anything else non-blank scores 5.
pub(crate) fn summary_points(summary: &str) -> f64 {
    if is_blank(summary) {
        return 0.0;
    }
    match text_length(summary) {
        n if n > 150 => 15.0,
        n if n > 50 => 10.0,
        _ => 5.0,
    }
}

pub(crate) fn skills_points(count: usize) -> f64 {
    (count as f64 / SATURATING_SKILL_COUNT * SKILLS_WEIGHT).min(SKILLS_WEIGHT)
}

/// Points for matched industry keywords, saturating at four matches.
pub(crate) fn coverage_points(matched: usize) -> f64 {
    (matched as f64 / SATURATING_KEYWORD_MATCHES * MAX_COVERAGE_POINTS).min(MAX_COVERAGE_POINTS)
}

pub(crate) fn has_titled_role(resume: &ResumeDocument) -> bool {
    resume
        .experience
        .iter()
        .any(|entry| !is_blank(&entry.company) && !is_blank(&entry.position))
}

/// Any achievement longer than ten characters once trimmed.
pub(crate) fn has_substantive_achievement(resume: &ResumeDocument) -> bool {
    resume
        .achievements()
        .any(|a| text_length(a.trim()) > MIN_ACHIEVEMENT_LENGTH)
}

/// Length in extended grapheme clusters, not `char`s or bytes.
///
/// A decomposed "e\u{301}" counts as one, the same as a precomposed "é".
pub(crate) fn text_length(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Case-insensitive prefix test against every corpus action verb.
///
/// Leading whitespace is ignored, so `"  Led a team"` qualifies.
pub(crate) fn starts_with_action_verb(achievement: &str) -> bool {
    let lowered = achievement.trim_start().to_lowercase();
    all_action_verbs().any(|verb| lowered.starts_with(&verb.to_lowercase()))
}

pub(crate) fn has_complete_education(resume: &ResumeDocument) -> bool {
    resume
        .education
        .iter()
        .any(|entry| !is_blank(&entry.school) && !is_blank(&entry.degree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::{EducationEntry, ExperienceEntry, Project};

    fn technology_context() -> ScoringContext {
        ScoringContext::new("Software Engineer", "Technology")
    }

    fn full_resume() -> ResumeDocument {
        ResumeDocument {
            personal: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                title: "Senior Engineer".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Portland, OR".to_string(),
                linkedin: "linkedin.com/in/janedoe".to_string(),
                ..Default::default()
            },
            summary: "x".repeat(200),
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                achievements: vec!["Led the migration to microservices across four teams".to_string()],
                ..Default::default()
            }],
            education: vec![EducationEntry {
                school: "State University".to_string(),
                degree: "BSc".to_string(),
                ..Default::default()
            }],
            skills: [
                "Agile", "DevOps", "Scalability", "Cybersecurity", "Rust", "Go", "SQL", "Docker",
                "Kubernetes", "Linux", "Git", "GraphQL",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            ..Default::default()
        }
    }

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Skill {i}")).collect()
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let result = score(&ResumeDocument::default(), &ScoringContext::default());

        assert_eq!(result.overall, 0);
        assert_eq!(result.breakdown, ScoreBreakdown::default());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_partial_personal_details() {
        let resume = ResumeDocument {
            personal: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "j@x.com".to_string(),
                phone: "555".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry::default()],
            ..Default::default()
        };

        let result = score(&resume, &ScoringContext::default());
        assert_eq!(result.breakdown.personal, 50);
        assert_eq!(result.breakdown.summary, 0);
        assert_eq!(result.breakdown.experience, 0);
        assert_eq!(result.breakdown.skills, 0);
        assert_eq!(result.overall, 10);
    }

    #[test]
    fn test_whitespace_only_fields_are_blank() {
        let resume = ResumeDocument {
            personal: PersonalInfo {
                full_name: "   ".to_string(),
                email: "\t".to_string(),
                ..Default::default()
            },
            summary: "   ".to_string(),
            ..Default::default()
        };

        let result = score(&resume, &ScoringContext::new("  ", " "));
        assert_eq!(result.overall, 0);
        assert_eq!(result.breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn test_summary_length_tiers() {
        let cases = [(200, 100), (151, 100), (150, 67), (51, 67), (50, 33), (1, 33)];
        for (len, expected) in cases {
            let resume = ResumeDocument {
                summary: "s".repeat(len),
                ..Default::default()
            };
            let result = score(&resume, &ScoringContext::default());
            assert_eq!(result.breakdown.summary, expected, "summary length {len}");
        }
    }

    #[test]
    fn test_summary_length_counts_characters_not_bytes() {
        // 60 two-byte characters: 120 bytes but only the middle tier.
        let resume = ResumeDocument {
            summary: "é".repeat(60),
            ..Default::default()
        };
        assert_eq!(score(&resume, &ScoringContext::default()).breakdown.summary, 67);
    }

    #[test]
    fn test_decomposed_characters_count_as_one() {
        // "e" + combining acute: 120 chars, 60 graphemes.
        let decomposed = "e\u{301}".repeat(60);
        assert_eq!(decomposed.chars().count(), 120);
        assert_eq!(text_length(&decomposed), 60);

        let resume = ResumeDocument {
            summary: decomposed,
            ..Default::default()
        };
        assert_eq!(score(&resume, &ScoringContext::default()).breakdown.summary, 67);
    }

    #[test]
    fn test_industry_keyword_coverage() {
        let resume = ResumeDocument {
            skills: vec!["Agile".to_string(), "Scalability".to_string()],
            ..Default::default()
        };

        let result = score(&resume, &technology_context());
        assert_eq!(result.breakdown.keywords, 75);
        assert_eq!(
            result.missing_keywords,
            vec![
                "Cloud Computing",
                "API Development",
                "DevOps",
                "Machine Learning",
                "Cybersecurity",
                "Microservices",
            ]
        );
        // 2/12 * 20 skill points + 15 keyword points
        assert_eq!(result.overall, 18);
    }

    #[test]
    fn test_keyword_coverage_saturates_at_four_matches() {
        let resume = ResumeDocument {
            skills: ["Agile", "DevOps", "Scalability", "Cybersecurity", "Microservices"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Default::default()
        };

        let result = score(&resume, &technology_context());
        assert_eq!(result.breakdown.keywords, 100);
        assert_eq!(result.missing_keywords.len(), 3);
    }

    #[test]
    fn test_keyword_found_in_summary_counts() {
        let resume = ResumeDocument {
            summary: "Engineer focused on cloud computing and devops culture".to_string(),
            ..Default::default()
        };

        let result = score(&resume, &technology_context());
        // 5 + 5 + 2/4 * 10
        assert_eq!(result.breakdown.keywords, 75);
        assert!(!result.missing_keywords.contains(&"DevOps".to_string()));
    }

    #[test]
    fn test_action_verb_achievement() {
        let resume = ResumeDocument {
            experience: vec![ExperienceEntry {
                achievements: vec![
                    "Led the redesign of the onboarding flow, cutting churn by 20%".to_string(),
                ],
                ..Default::default()
            }],
            ..Default::default()
        };

        let result = score(&resume, &ScoringContext::default());
        assert_eq!(result.breakdown.experience, 60);
        // 15 achievement points + 5 action verb bonus
        assert_eq!(result.overall, 20);
    }

    #[test]
    fn test_short_achievement_gets_no_experience_points() {
        let resume = ResumeDocument {
            experience: vec![ExperienceEntry {
                achievements: vec!["   Led team   ".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };

        let result = score(&resume, &ScoringContext::default());
        assert_eq!(result.breakdown.experience, 0);
        // The action verb bonus still applies.
        assert_eq!(result.overall, 5);
    }

    #[test]
    fn test_titled_role_without_achievements() {
        let resume = ResumeDocument {
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                position: "Analyst".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let result = score(&resume, &ScoringContext::default());
        assert_eq!(result.breakdown.experience, 40);
        assert_eq!(result.overall, 10);
    }

    #[test]
    fn test_education_bonus_requires_school_and_degree() {
        let mut resume = ResumeDocument {
            education: vec![EducationEntry {
                school: "State University".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(score(&resume, &ScoringContext::default()).overall, 0);

        resume.education[0].degree = "BA".to_string();
        assert_eq!(score(&resume, &ScoringContext::default()).overall, 5);
    }

    #[test]
    fn test_overall_is_capped_at_100() {
        let result = score(&full_resume(), &technology_context());

        assert_eq!(result.overall, 100);
        assert_eq!(result.breakdown.personal, 100);
        assert_eq!(result.breakdown.summary, 100);
        assert_eq!(result.breakdown.experience, 100);
        assert_eq!(result.breakdown.skills, 100);
        assert_eq!(result.breakdown.keywords, 100);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let resume = full_resume();
        let context = technology_context();

        let first = score(&resume, &context);
        let second = score(&resume, &context);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_filling_personal_field_never_decreases_score() {
        let mut resume = full_resume();
        resume.personal.phone.clear();
        resume.summary = "Short summary".to_string();
        let before = score(&resume, &ScoringContext::default());

        resume.personal.phone = "555-0100".to_string();
        let after = score(&resume, &ScoringContext::default());

        assert!(after.breakdown.personal > before.breakdown.personal);
        assert!(after.overall >= before.overall);
    }

    #[test]
    fn test_skills_saturate_but_breakdown_exceeds_100() {
        let mut resume = ResumeDocument {
            skills: skills(12),
            ..Default::default()
        };
        let at_twelve = score(&resume, &ScoringContext::default());
        assert_eq!(at_twelve.breakdown.skills, 100);
        assert_eq!(at_twelve.overall, 20);

        resume.skills = skills(20);
        let at_twenty = score(&resume, &ScoringContext::default());
        assert_eq!(at_twenty.breakdown.skills, 167);
        assert_eq!(at_twenty.overall, 20);
    }

    #[test]
    fn test_clamped_skills_breakdown_option() {
        let resume = ResumeDocument {
            skills: skills(20),
            ..Default::default()
        };
        let scorer = CompatibilityScorer::with_options(ScoringOptions {
            clamp_skills_breakdown: true,
            ..Default::default()
        });

        let result = scorer.score(&resume, &ScoringContext::default());
        assert_eq!(result.breakdown.skills, 100);
        assert_eq!(result.overall, 20);
    }

    #[test]
    fn test_unknown_industry_only_earns_context_points() {
        let resume = ResumeDocument {
            skills: vec!["Agile".to_string()],
            ..Default::default()
        };
        let context = ScoringContext::new("", "Nonexistent");

        let result = score(&resume, &context);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.breakdown.keywords, 25);
    }

    #[test]
    fn test_keyword_scope_controls_unscored_sections() {
        let resume = ResumeDocument {
            projects: vec![Project {
                name: "Microservices platform".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let context = ScoringContext::new("", "Technology");

        let whole = score(&resume, &context);
        assert!(!whole.missing_keywords.contains(&"Microservices".to_string()));

        let fields_only = CompatibilityScorer::with_options(ScoringOptions {
            keyword_scope: KeywordScope::Fields,
            ..Default::default()
        })
        .score(&resume, &context);
        assert!(fields_only.missing_keywords.contains(&"Microservices".to_string()));
        assert!(fields_only.breakdown.keywords < whole.breakdown.keywords);
    }

    #[test]
    fn test_score_result_serializes_camel_case() {
        let json = serde_json::to_value(score(&ResumeDocument::default(), &technology_context())).unwrap();
        assert!(json.get("missingKeywords").is_some());
        assert_eq!(json["breakdown"]["keywords"], 50);
    }

    #[test]
    fn test_action_verb_prefix_matching() {
        assert!(starts_with_action_verb("optimized build times by 40%"));
        assert!(starts_with_action_verb("  Spearheaded a hiring push"));
        assert!(starts_with_action_verb("\t\nLed a team of five"));
        assert!(!starts_with_action_verb("Responsible for payroll"));
        assert!(!starts_with_action_verb(""));
    }
}
