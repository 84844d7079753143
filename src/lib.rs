//! Resume ATS compatibility scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ScorerError};
pub use processing::{score, ResumeDocument, ScoreResult, ScoringContext};
