//! Formatters for rendering score reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::scoring::ScoreReport;
use colored::Colorize;

/// Trait for formatting score reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with tier-based score coloring
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn score_label(&self, score: u32) -> String {
        let label = format!("{}/100", score);
        if !self.use_colors {
            return label;
        }
        match score {
            80.. => label.green().bold().to_string(),
            60..=79 => label.cyan().bold().to_string(),
            40..=59 => label.yellow().bold().to_string(),
            _ => label.red().bold().to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "ATS Compatibility Score: {}\n\n",
            self.score_label(report.total_score)
        ));

        out.push_str("Breakdown:\n");
        let breakdown = &report.breakdown;
        for (name, value, cap) in [
            ("keywords", breakdown.keywords, None),
            ("education", breakdown.education, Some(25)),
            ("experience", breakdown.experience, Some(25)),
            ("skills", breakdown.skills, Some(25)),
            ("formatting", breakdown.formatting, Some(20)),
        ] {
            match cap {
                Some(cap) => out.push_str(&format!("  {:<12} {:>3} (max {})\n", name, value, cap)),
                None => out.push_str(&format!("  {:<12} {:>3}\n", name, value)),
            }
        }

        out.push_str("\nFeedback:\n");
        for line in &report.feedback {
            out.push_str(&format!("  - {}\n", line));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
