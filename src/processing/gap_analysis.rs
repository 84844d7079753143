//! Industry keyword gap analysis

use crate::processing::document::{is_blank, ResumeDocument, ScoringContext};
use crate::processing::keyword_corpus::industry_keywords;
use crate::processing::keyword_matcher::{searchable_texts, KeywordMatcher, KeywordScope};
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a skill to count as a near match.
pub const NEAR_MATCH_THRESHOLD: f64 = 0.85;

/// Industry keywords split into found and missing, each in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCoverage {
    pub matched: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

impl KeywordCoverage {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// A missing keyword, with the closest existing skill when one looks like a
/// variant spelling of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordGap {
    pub keyword: String,
    pub near_match: Option<NearMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearMatch {
    pub skill: String,
    pub similarity: f64,
}

/// Which industry keywords the resume covers under the given search scope.
///
/// Empty when the industry is blank or not in the corpus.
pub fn keyword_coverage(
    resume: &ResumeDocument,
    context: &ScoringContext,
    scope: KeywordScope,
) -> KeywordCoverage {
    if is_blank(&context.industry_focus) {
        return KeywordCoverage::default();
    }

    let keywords = industry_keywords(&context.industry_focus);
    if keywords.is_empty() {
        return KeywordCoverage::default();
    }

    let matcher = KeywordMatcher::new(keywords);
    let found = matcher.find_matches(&searchable_texts(resume, scope));

    let mut coverage = KeywordCoverage::default();
    for (keyword, is_found) in keywords.iter().copied().zip(found) {
        if is_found {
            coverage.matched.push(keyword);
        } else {
            coverage.missing.push(keyword);
        }
    }
    coverage
}

pub fn missing_keywords(
    resume: &ResumeDocument,
    context: &ScoringContext,
    scope: KeywordScope,
) -> Vec<String> {
    keyword_coverage(resume, context, scope)
        .missing
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Missing keywords annotated with near-miss skills already on the resume.
pub fn keyword_gaps(
    resume: &ResumeDocument,
    context: &ScoringContext,
    scope: KeywordScope,
) -> Vec<KeywordGap> {
    keyword_coverage(resume, context, scope)
        .missing
        .into_iter()
        .map(|keyword| KeywordGap {
            keyword: keyword.to_string(),
            near_match: find_near_match(&resume.skills, keyword),
        })
        .collect()
}

pub(crate) fn find_near_match(skills: &[String], keyword: &str) -> Option<NearMatch> {
    let keyword_lower = keyword.to_lowercase();
    let mut best: Option<NearMatch> = None;

    for skill in skills {
        let candidate = skill.trim();
        if candidate.is_empty() {
            continue;
        }

        let similarity = jaro_winkler(&keyword_lower, &candidate.to_lowercase());
        let is_better = best.as_ref().map_or(true, |b| similarity > b.similarity);
        if similarity >= NEAR_MATCH_THRESHOLD && is_better {
            best = Some(NearMatch {
                skill: candidate.to_string(),
                similarity,
            });
        }
    }

    best
}

/// Add keywords to the resume's skills, skipping blanks and duplicates.
///
/// This is the explicit "add this keyword" action; scoring never calls it.
/// Returns how many skills were added.
pub fn apply_keywords<S: AsRef<str>>(resume: &mut ResumeDocument, keywords: &[S]) -> usize {
    let mut added = 0;
    for keyword in keywords {
        if resume.add_skill(keyword.as_ref()) {
            added += 1;
        }
    }
    added
}
