//! Resume scoring and analysis module

pub mod document;
pub mod keyword_corpus;
pub mod keyword_matcher;
pub mod ats_scorer;
pub mod gap_analysis;
pub mod recommendations;

pub use ats_scorer::{score, CompatibilityScorer, ScoreBreakdown, ScoreResult, ScoringOptions};
pub use document::{ResumeDocument, ScoringContext};
pub use keyword_matcher::KeywordScope;
