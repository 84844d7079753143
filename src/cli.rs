//! CLI interface for the ATS scorer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-ats-scorer")]
#[command(about = "ATS compatibility scoring for structured resumes")]
#[command(long_about = "Score a JSON or TOML resume for applicant tracking system compatibility, list missing industry keywords and suggest improvements")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume
    Score {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target role, e.g. "Backend Engineer"
        #[arg(long)]
        role: Option<String>,

        /// Industry focus, e.g. "Technology"
        #[arg(short, long)]
        industry: Option<String>,

        /// Keyword search scope: document, fields
        #[arg(long)]
        scope: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to a file, or into a directory under a suggested name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include keyword gaps and all recommendation steps
        #[arg(short, long)]
        detailed: bool,
    },

    /// Add keywords to a resume's skills
    Apply {
        /// Path to resume file (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Industry whose missing keywords are added when none are given
        #[arg(short, long)]
        industry: Option<String>,

        /// Keyword to add (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Write the updated resume here instead of overwriting the input
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Browse the keyword corpus
    Keywords {
        #[command(subcommand)]
        action: KeywordAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum KeywordAction {
    /// List known industries
    Industries,

    /// List skill categories
    Categories {
        /// Show the terms of one category
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List action verbs by category
    Verbs,

    /// Show the keywords for an industry
    Industry {
        /// Industry name, e.g. "Finance"
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from([
            "resume-ats-scorer",
            "score",
            "--resume",
            "resume.json",
            "--industry",
            "Technology",
            "--output",
            "md",
        ])
        .unwrap();

        match cli.command {
            Commands::Score {
                resume,
                industry,
                output,
                ..
            } => {
                assert_eq!(resume, PathBuf::from("resume.json"));
                assert_eq!(industry.as_deref(), Some("Technology"));
                assert_eq!(parse_output_format(&output.unwrap()), Ok(OutputFormat::Markdown));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_parse_repeated_keywords() {
        let cli = Cli::try_parse_from([
            "resume-ats-scorer",
            "apply",
            "-r",
            "resume.toml",
            "-k",
            "Agile",
            "-k",
            "DevOps",
        ])
        .unwrap();

        match cli.command {
            Commands::Apply { keywords, .. } => assert_eq!(keywords, vec!["Agile", "DevOps"]),
            _ => panic!("expected apply command"),
        }
    }

    #[test]
    fn test_invalid_output_format() {
        assert!(parse_output_format("pdf").is_err());
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["json", "toml"];
        assert!(validate_file_extension(Path::new("cv.JSON"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.pdf"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }
}
