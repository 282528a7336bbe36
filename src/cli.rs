//! CLI interface for the job matcher

use crate::config::OutputFormat;
use crate::input::file_detector::{FileType, SUPPORTED_EXTENSIONS};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const RESUME_EXTENSIONS: &[&str] = SUPPORTED_EXTENSIONS;
pub const JOB_EXTENSIONS: &[&str] = SUPPORTED_EXTENSIONS;

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Compare a resume with a job description")]
#[command(long_about = "Score a resume against a job description with TF-IDF cosine similarity and list matched and missing keywords")]
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
    /// Match a resume against a job description
    Match {
        /// Path to resume file (TXT, MD, PDF); prompted for when omitted
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Path to job description file (TXT, MD, PDF); prompted for when omitted
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Number of top keywords extracted from each document
        #[arg(short = 'k', long)]
        keywords: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file; a directory gets a generated file name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show keyword lists and the raw score
        #[arg(short, long)]
        detailed: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
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
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
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

/// Ask for a path on `output` and read one line from `input`.
///
/// Errors when input is exhausted or the answer is blank.
pub fn prompt_for_path<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> std::io::Result<PathBuf> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no path entered",
        ));
    }

    let answer = line.trim();
    if answer.is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "empty path entered",
        ));
    }
    Ok(PathBuf::from(answer))
}
