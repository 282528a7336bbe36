//! Output formatters for match reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{JobMatcherError, Result};
use crate::output::report::{MatchReport, ScoreBand};
use colored::{Color, Colorize};
use std::path::Path;

const RULE_WIDTH: usize = 60;
const TOP_KEYWORDS_SHOWN: usize = 10;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    max_missing_shown: usize,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
    max_missing_shown: usize,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
            max_missing_shown: 10,
        }
    }

    pub fn with_max_missing_shown(mut self, max_missing_shown: usize) -> Self {
        self.max_missing_shown = max_missing_shown;
        self
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_band(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::BrightGreen,
            ScoreBand::Moderate => Color::Yellow,
            ScoreBand::Weak => Color::Red,
        };
        let mark = if band.is_positive() { " ✓" } else { "" };
        let text = format!("{}{}", band.label(), mark);

        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text
        }
    }

    fn rule(&self) -> String {
        "=".repeat(RULE_WIDTH)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", self.rule()));
        output.push_str("JOB MATCHING RESULTS\n");
        output.push_str(&format!("{}\n", self.rule()));

        output.push_str(&format!("\nMatch Score: {:.1}%\n", report.match_percentage));
        output.push_str(&format!("Status: {}\n", self.format_band(report.band)));

        let matched = report.sorted_matched();
        output.push_str(&format!("\nMatched Skills ({}):\n", matched.len()));
        if matched.is_empty() {
            output.push_str("  (No overlapping skills found)\n");
        } else {
            for skill in &matched {
                output.push_str(&format!("  {} {}\n", self.colorize("✓", Color::Green), skill));
            }
        }

        let missing = report.sorted_missing();
        output.push_str(&format!("\nMissing Skills ({}):\n", missing.len()));
        if missing.is_empty() {
            output.push_str("  (All job skills are present in resume)\n");
        } else {
            for skill in missing.iter().take(self.max_missing_shown) {
                output.push_str(&format!("  {} {}\n", self.colorize("✗", Color::Red), skill));
            }
            if missing.len() > self.max_missing_shown {
                output.push_str(&format!("  ... and {} more\n", missing.len() - self.max_missing_shown));
            }
        }

        if self.detailed {
            output.push_str(&format!("\n{}\n", self.colorize("Details:", Color::Cyan)));
            output.push_str(&format!(
                "Resume Keywords: {}\n",
                join_top(&report.result.resume_keywords, TOP_KEYWORDS_SHOWN)
            ));
            output.push_str(&format!(
                "Job Keywords: {}\n",
                join_top(&report.result.job_keywords, TOP_KEYWORDS_SHOWN)
            ));
            output.push_str(&format!("Match Score (raw): {:.4}\n", report.result.score));
            output.push_str(&format!(
                "Generated: {} | Keywords per document: {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.num_keywords
            ));
        }

        output.push_str(&format!("\n{}\n", self.rule()));
        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self {
            include_metadata,
            max_missing_shown: 10,
        }
    }

    pub fn with_max_missing_shown(mut self, max_missing_shown: usize) -> Self {
        self.max_missing_shown = max_missing_shown;
        self
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Job Matching Results\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                file_name(&report.metadata.resume_file),
                file_name(&report.metadata.job_file)
            ));
        }

        output.push_str(&format!(
            "**Match Score:** {:.1}% ({})\n\n",
            report.match_percentage,
            report.band.label()
        ));

        let matched = report.sorted_matched();
        output.push_str(&format!("## Matched Skills ({})\n\n", matched.len()));
        if matched.is_empty() {
            output.push_str("_No overlapping skills found._\n");
        } else {
            for skill in &matched {
                output.push_str(&format!("- {}\n", skill));
            }
        }
        output.push('\n');

        let missing = report.sorted_missing();
        output.push_str(&format!("## Missing Skills ({})\n\n", missing.len()));
        if missing.is_empty() {
            output.push_str("_All job skills are present in resume._\n");
        } else {
            for skill in missing.iter().take(self.max_missing_shown) {
                output.push_str(&format!("- {}\n", skill));
            }
            if missing.len() > self.max_missing_shown {
                output.push_str(&format!("- _... and {} more_\n", missing.len() - self.max_missing_shown));
            }
        }

        if self.include_metadata {
            output.push_str("\n## Keywords\n\n");
            output.push_str("| Document | Top keywords |\n");
            output.push_str("|----------|--------------|\n");
            output.push_str(&format!(
                "| Resume | {} |\n",
                join_top(&report.result.resume_keywords, TOP_KEYWORDS_SHOWN)
            ));
            output.push_str(&format!(
                "| Job | {} |\n",
                join_top(&report.result.job_keywords, TOP_KEYWORDS_SHOWN)
            ));
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed)
                .with_max_missing_shown(config.max_missing_shown),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true).with_max_missing_shown(config.max_missing_shown),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(file_path, content).map_err(|e| {
        JobMatcherError::OutputFormatting(format!(
            "Failed to write report to '{}': {}",
            file_path.display(),
            e
        ))
    })
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_match{}.{}", base_name, timestamp_suffix, extension)
}

fn join_top(keywords: &[String], limit: usize) -> String {
    if keywords.is_empty() {
        return "(none)".to_string();
    }
    let shown = keywords.iter().take(limit).cloned().collect::<Vec<_>>().join(", ");
    if keywords.len() > limit {
        format!("{}, ...", shown)
    } else {
        shown
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}
