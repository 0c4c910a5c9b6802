//! Resume scorer: ATS compatibility scoring and resume drafting tool

mod builder;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod scoring;

use builder::pdf::PdfRenderer;
use builder::{ResumeDraft, ResumeGenerator};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeScorerError};
use input::InputManager;
use log::{error, info};
use output::{ConsoleFormatter, JsonFormatter, OutputFormatter};
use scoring::{JobContext, ScoreEngine};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            title,
            output,
            save,
        } => {
            info!("Starting ATS scoring");

            // Validate input files
            cli::validate_file_extension(&resume, &["pdf", "docx", "txt", "md"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md"]).map_err(|e| {
                    ResumeScorerError::InvalidInput(format!("Job description file: {}", e))
                })?;
            }

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeScorerError::InvalidInput)?;

            let mut input_manager = InputManager::new()
                .with_cache(config.input.enable_caching)
                .with_max_file_size(config.input.max_file_size);

            let resume_text = input_manager.extract_text(&resume).await?;
            info!("Extracted {} characters of resume text", resume_text.len());

            let job_context = match (job, title) {
                (Some(job_path), _) => {
                    let description = input_manager.extract_text(&job_path).await?;
                    JobContext::Description(description)
                }
                (None, Some(title)) => JobContext::Title(title),
                (None, None) => JobContext::None,
            };

            let engine = ScoreEngine::new();
            let report = engine.score(&resume_text, &job_context);

            let formatted = match output_format {
                OutputFormat::Console => {
                    ConsoleFormatter::new(config.output.color_output).format_report(&report)?
                }
                OutputFormat::Json => JsonFormatter::default().format_report(&report)?,
            };

            println!("{}", formatted);

            if let Some(save_path) = save {
                tokio::fs::write(&save_path, &formatted).await?;
                info!("Saved report to {}", save_path.display());
            }
        }

        Commands::Build {
            info,
            input,
            output,
        } => {
            let personal_info = read_personal_info(info, input).await?;

            info!("Requesting resume draft");
            let generator = ResumeGenerator::new(config.builder.clone());
            let generated = generator.generate(&personal_info).await?;

            let draft = ResumeDraft::from_text(&generated);
            PdfRenderer.render(&draft, &output)?;

            println!("Resume written to {}", output.display());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Max file size: {} bytes", config.input.max_file_size);
                println!("Caching enabled: {}", config.input.enable_caching);
                println!(
                    "Generation endpoint: {}/{}",
                    config.builder.api_url, config.builder.model
                );
                println!("API key env var: {}", config.builder.api_key_env);
                println!("Output format: {:?}", config.output.format);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

/// Resolve the personal info for `build` from either the inline flag or an
/// input file.
async fn read_personal_info(info: Option<String>, input: Option<PathBuf>) -> Result<String> {
    match (info, input) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(tokio::fs::read_to_string(&path).await?),
        (None, None) => Err(ResumeScorerError::InvalidInput(
            "Provide personal info with --info or --input".to_string(),
        )),
    }
}
