//! Report structure combining a score with its gap analysis and recommendations

use crate::processing::ats_scorer::{CompatibilityScorer, ScoreResult, ScoringOptions};
use crate::processing::document::{ResumeDocument, ScoringContext};
use crate::processing::gap_analysis::{keyword_gaps, KeywordGap};
use crate::processing::keyword_matcher::KeywordScope;
use crate::processing::recommendations::{recommend, Recommendation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the formatters render for a single scoring run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub result: ScoreResult,

    /// One-line verdict for the overall score
    pub verdict: String,

    /// Missing industry keywords, with near-miss skills where found
    pub keyword_gaps: Vec<KeywordGap>,

    /// Most valuable first
    pub recommendations: Vec<Recommendation>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scorer_version: String,
    pub resume_file: String,
    pub target_role: String,
    pub industry_focus: String,
    pub keyword_scope: KeywordScope,
}

impl ScoreReport {
    /// Score the resume and assemble the full report.
    pub fn build(
        resume: &ResumeDocument,
        context: &ScoringContext,
        options: ScoringOptions,
        resume_file: &str,
    ) -> Self {
        let result = CompatibilityScorer::with_options(options).score(resume, context);
        let keyword_gaps = keyword_gaps(resume, context, options.keyword_scope);
        let recommendations = recommend(resume, context, &result);

        Self {
            verdict: verdict(result.overall).to_string(),
            result,
            keyword_gaps,
            recommendations,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scorer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.to_string(),
                target_role: context.target_role.clone(),
                industry_focus: context.industry_focus.clone(),
                keyword_scope: options.keyword_scope,
            },
        }
    }

    /// Breakdown rows as (label, percent, weight).
    pub fn breakdown_rows(&self) -> [(&'static str, u32, u32); 5] {
        let b = &self.result.breakdown;
        [
            ("Personal Details", b.personal, 20),
            ("Summary", b.summary, 15),
            ("Experience", b.experience, 25),
            ("Skills", b.skills, 20),
            ("Keywords", b.keywords, 20),
        ]
    }
}

fn verdict(overall: u32) -> &'static str {
    match overall {
        90..=100 => "Ready to submit: the resume is highly ATS compatible",
        75..=89 => "Strong resume with a few gaps to close",
        50..=74 => "Partially compatible: several sections need work",
        25..=49 => "Weak compatibility: important sections are missing",
        _ => "Resume is largely incomplete for ATS screening",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty_resume_report() {
        let report = ScoreReport::build(
            &ResumeDocument::default(),
            &ScoringContext::new("", "Technology"),
            ScoringOptions::default(),
            "cv.json",
        );

        // Only the industry focus itself scores.
        assert_eq!(report.result.overall, 5);
        assert_eq!(report.keyword_gaps.len(), 8);
        assert!(!report.recommendations.is_empty());
        assert_eq!(report.metadata.resume_file, "cv.json");
        assert_eq!(report.metadata.industry_focus, "Technology");
        assert_eq!(report.verdict, verdict(5));
    }

    #[test]
    fn test_breakdown_rows_follow_weights() {
        let report = ScoreReport::build(
            &ResumeDocument::default(),
            &ScoringContext::default(),
            ScoringOptions::default(),
            "cv.json",
        );
        let total: u32 = report.breakdown_rows().iter().map(|(_, _, w)| w).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_serializes_camel_case() {
        let report = ScoreReport::build(
            &ResumeDocument::default(),
            &ScoringContext::default(),
            ScoringOptions::default(),
            "cv.json",
        );
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("keywordGaps").is_some());
        assert!(json["metadata"].get("generatedAt").is_some());
        assert_eq!(json["result"]["overall"], 0);
    }
}
