//! resume-ats-scorer: ATS compatibility scoring for structured resumes

use anyhow::{bail, Context};
use clap::Parser;
use log::{error, info};
use resume_ats_scorer::cli::{self, Cli, Commands, ConfigAction, KeywordAction};
use resume_ats_scorer::config::Config;
use resume_ats_scorer::input::InputManager;
use resume_ats_scorer::output::formatter::{
    resolve_report_path, save_report_to_file, ReportGenerator,
};
use resume_ats_scorer::output::ScoreReport;
use resume_ats_scorer::processing::gap_analysis::{apply_keywords, missing_keywords};
use resume_ats_scorer::processing::keyword_corpus::{
    action_verbs, industries, industry_keywords, skill_categories, skill_category,
};
use resume_ats_scorer::processing::{KeywordScope, ScoringContext};
use std::path::{Path, PathBuf};
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["json", "toml"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Score {
            resume,
            role,
            industry,
            scope,
            output,
            save,
            detailed,
        } => {
            run_score(
                &config,
                ScoreArgs {
                    resume,
                    role,
                    industry,
                    scope,
                    output,
                    save,
                    detailed,
                },
            )
            .await
        }

        Commands::Apply {
            resume,
            industry,
            keywords,
            save,
        } => {
            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(anyhow::Error::msg)
                .context("Resume file")?;

            let mut input_manager = InputManager::new();
            let mut document = input_manager.load_document(&resume).await?;

            let keywords = if keywords.is_empty() {
                let industry = industry.unwrap_or(config.defaults.industry_focus.clone());
                if industry_keywords(&industry).is_empty() {
                    bail!("No keywords given and no known industry to take them from");
                }
                let context = ScoringContext::new("", industry);
                missing_keywords(&document, &context, config.scoring.keyword_scope)
            } else {
                keywords
            };

            let added = apply_keywords(&mut document, &keywords);
            let target = save.unwrap_or(resume);
            input_manager.save_document(&document, &target).await?;

            println!("✅ Added {} of {} keywords to {}", added, keywords.len(), target.display());
            Ok(())
        }

        Commands::Keywords { action } => {
            show_keywords(action)?;
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .context("Failed to serialize configuration")?;
                println!("📁 {}\n", config_path.display());
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset: {}", config_path.display());
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
        },
    }
}

struct ScoreArgs {
    resume: PathBuf,
    role: Option<String>,
    industry: Option<String>,
    scope: Option<String>,
    output: Option<String>,
    save: Option<PathBuf>,
    detailed: bool,
}

async fn run_score(config: &Config, args: ScoreArgs) -> anyhow::Result<()> {
    cli::validate_file_extension(&args.resume, RESUME_EXTENSIONS)
        .map_err(anyhow::Error::msg)
        .context("Resume file")?;

    let format = match &args.output {
        Some(output) => cli::parse_output_format(output).map_err(anyhow::Error::msg)?,
        None => config.output.format,
    };

    let mut options = config.scoring_options();
    if let Some(scope) = &args.scope {
        options.keyword_scope = scope.parse::<KeywordScope>().map_err(anyhow::Error::msg)?;
    }

    let context = ScoringContext::new(
        args.role.unwrap_or_else(|| config.defaults.target_role.clone()),
        args.industry.unwrap_or_else(|| config.defaults.industry_focus.clone()),
    );

    let mut input_manager = InputManager::new();
    let document = input_manager
        .load_document(&args.resume)
        .await
        .with_context(|| format!("Failed to load resume {}", args.resume.display()))?;

    info!(
        "Scoring {} (role: {:?}, industry: {:?}, scope: {})",
        args.resume.display(),
        context.target_role,
        context.industry_focus,
        options.keyword_scope
    );

    let mut report = ScoreReport::build(
        &document,
        &context,
        options,
        &args.resume.to_string_lossy(),
    );
    if !config.output.include_recommendations {
        report.recommendations.clear();
    }

    let generator = ReportGenerator::with_options(
        config.output.color_output && args.save.is_none(),
        args.detailed || config.output.detailed,
        true,
        true,
        true,
    );
    let content = generator.generate_report(&report, format)?;

    match &args.save {
        Some(target) => {
            let path = resolve_report_path(target, format, &args.resume.to_string_lossy());
            save_report_to_file(&content, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn show_keywords(action: KeywordAction) -> anyhow::Result<()> {
    match action {
        KeywordAction::Industries => {
            println!("🏭 Industries:");
            for name in industries() {
                println!("  • {} ({} keywords)", name, industry_keywords(name).len());
            }
        }
        KeywordAction::Categories { name: Some(name) } => {
            let Some(category) = skill_category(&name) else {
                bail!("Unknown skill category: {}", name);
            };
            println!("🧰 {}:", category.name);
            for term in category.terms {
                println!("  • {}", term);
            }
        }
        KeywordAction::Categories { name: None } => {
            println!("🧰 Skill categories:");
            for category in skill_categories() {
                println!("  • {} ({} skills)", category.name, category.terms.len());
            }
        }
        KeywordAction::Verbs => {
            println!("💪 Action verbs:");
            for set in action_verbs() {
                println!("  • {}: {}", set.name, set.terms.join(", "));
            }
        }
        KeywordAction::Industry { name } => {
            let keywords = industry_keywords(&name);
            if keywords.is_empty() {
                bail!(
                    "Unknown industry: {}. Known: {}",
                    name,
                    industries().collect::<Vec<_>>().join(", ")
                );
            }
            println!("🔍 {} keywords:", name);
            for keyword in keywords {
                println!("  • {}", keyword);
            }
        }
    }
    Ok(())
}
