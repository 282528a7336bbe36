//! Job matcher: compare a resume with a job description

use clap::Parser;
use job_matcher::cli::{self, Cli, Commands, ConfigAction};
use job_matcher::config::{Config, OutputConfig};
use job_matcher::error::{JobMatcherError, Result};
use job_matcher::input::InputManager;
use job_matcher::output::formatter::{save_report_to_file, suggest_filename};
use job_matcher::output::{MatchReport, ReportGenerator};
use job_matcher::processing::JobMatcher;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(path) => {
            warn!("Config file {} not found, using defaults", path.display());
            Ok(Config::default())
        }
        None => Config::load(),
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            keywords,
            output,
            save,
            detailed,
            no_color,
        } => {
            if let Some(keywords) = keywords {
                config.matching.num_keywords = keywords;
            }
            if let Some(output) = output {
                config.output.format = cli::parse_output_format(&output).map_err(JobMatcherError::InvalidInput)?;
            }
            config.output.detailed |= detailed;
            config.output.color_output &= !no_color;

            let resume = resolve_path(resume, "Enter the path to your resume file: ")?;
            let job = resolve_path(job, "Enter the path to the job description file: ")?;

            cli::validate_file_extension(&resume, cli::RESUME_EXTENSIONS)
                .map_err(|e| JobMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, cli::JOB_EXTENSIONS)
                .map_err(|e| JobMatcherError::InvalidInput(format!("Job description file: {}", e)))?;

            info!("Matching {} against {}", resume.display(), job.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let matcher = JobMatcher::from_config(&config.matching);
            let result = matcher.match_default(&resume_text, &job_text)?;

            let report = MatchReport::new(
                result,
                &resume.to_string_lossy(),
                &job.to_string_lossy(),
                matcher.num_keywords(),
            );

            let generator = ReportGenerator::from_config(&config.output);
            let rendered = generator.generate_report(&report, config.output.format)?;
            println!("{}", rendered);

            if let Some(mut save_path) = save {
                if save_path.is_dir() {
                    save_path.push(suggest_filename(config.output.format, &resume.to_string_lossy(), true));
                }
                // Files never carry terminal color codes
                let plain = ReportGenerator::from_config(&OutputConfig {
                    color_output: false,
                    ..config.output.clone()
                });
                let content = plain.generate_report(&report, config.output.format)?;
                save_report_to_file(&content, &save_path)?;
                info!("Report saved to {}", save_path.display());
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Configuration ({})\n", path.display());
                    println!("Keywords per document: {}", config.matching.num_keywords);
                    println!("Minimum token length: {}", config.matching.min_token_length);
                    match config.matching.max_features {
                        Some(limit) => println!("TF-IDF vocabulary cap: {}", limit),
                        None => println!("TF-IDF vocabulary cap: none"),
                    }
                    if config.matching.extra_stop_words.is_empty() {
                        println!("Extra stop-words: (none)");
                    } else {
                        println!("Extra stop-words: {}", config.matching.extra_stop_words.join(", "));
                    }
                    println!("\nOutput format: {:?}", config.output.format);
                    println!("Detailed: {}", config.output.detailed);
                    println!("Colors: {}", config.output.color_output);
                    println!("Missing skills shown: {}", config.output.max_missing_shown);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Use the given path or ask for one on stdin
fn resolve_path(path: Option<PathBuf>, prompt: &str) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            Ok(cli::prompt_for_path(prompt, &mut stdin.lock(), &mut stdout)?)
        }
    }
}
