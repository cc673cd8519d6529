//! Console output formatter for council results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use council_application::RunCouncilOutput;
use council_domain::{Severity, SynthesisReport};

/// Formats council results for console display
pub struct ConsoleFormatter {
    /// Hide ranked claims below this confidence (display filter only)
    min_confidence: f64,
}

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self {
            min_confidence: 0.0,
        }
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    fn header(title: &str) -> String {
        format!(
            "{}\n{}\n{}\n",
            "=".repeat(62),
            format!("  {}", title).bold(),
            "=".repeat(62)
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(62))
    }

    fn severity_colored(severity: Severity) -> String {
        let label = severity.to_string();
        match severity {
            Severity::Critical => label.red().bold().to_string(),
            Severity::High => label.red().to_string(),
            Severity::Medium => label.yellow().to_string(),
            Severity::Low => label.green().to_string(),
        }
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &RunCouncilOutput) -> String {
        let mut text = self.format_report(&output.report);

        text.push_str(&Self::section_header("Execution Log"));
        for record in output.log.records() {
            let perspective = record
                .perspective_id
                .as_deref()
                .map(|id| format!(" [{}]", id))
                .unwrap_or_default();
            text.push_str(&format!(
                "  {} {}{}: {}\n",
                record.timestamp.format("%H:%M:%S%.3f"),
                record.stage.as_str().dimmed(),
                perspective.dimmed(),
                record.message
            ));
        }

        if output.has_warnings() {
            text.push_str(&format!(
                "\n{}\n",
                "Run completed with warnings; see the execution log above."
                    .yellow()
                    .bold()
            ));
        }
        text
    }

    fn format_report(&self, report: &SynthesisReport) -> String {
        let mut text = String::new();

        text.push_str(&Self::header("Critique Council Report"));

        // Arbiter score
        match report.arbiter_overall_score {
            Some(score) => {
                text.push_str(&format!(
                    "\n{} {}/100\n",
                    "Overall score:".cyan().bold(),
                    score
                ));
                if let Some(justification) = &report.arbiter_score_justification {
                    text.push_str(&format!("{}\n", justification.italic()));
                }
            }
            None => {
                text.push_str(&format!(
                    "\n{} {}\n",
                    "Overall score:".cyan().bold(),
                    "unavailable (arbitration failed)".yellow()
                ));
            }
        }

        // Ranked claims
        text.push_str(&Self::section_header("Ranked Claims"));
        let mut hidden = 0;
        for (index, ranked) in report.ranked_claims.iter().enumerate() {
            if ranked.confidence < self.min_confidence {
                hidden += 1;
                continue;
            }
            text.push_str(&format!(
                "\n{} {} {} {}\n",
                format!("{}.", index + 1).bold(),
                format!("[{}]", ranked.area).yellow(),
                Self::severity_colored(ranked.severity),
                format!("(confidence {:.2})", ranked.confidence).dimmed(),
            ));
            text.push_str(&format!("   {}\n", ranked.claim.claim_text));
            if !ranked.claim.evidence_text.is_empty() {
                text.push_str(&format!(
                    "   {} {}\n",
                    "Evidence:".dimmed(),
                    ranked.claim.evidence_text
                ));
            }
            if !ranked.claim.recommendation.is_empty() {
                text.push_str(&format!(
                    "   {} {}\n",
                    "Recommendation:".dimmed(),
                    ranked.claim.recommendation
                ));
            }
            if let Some(concession) = &ranked.claim.concession {
                text.push_str(&format!("   {} {}\n", "Concession:".dimmed(), concession));
            }
        }
        if report.ranked_claims.is_empty() {
            text.push_str("\n  (no claims survived synthesis)\n");
        }
        if hidden > 0 {
            text.push_str(&format!(
                "\n  {} claim(s) below confidence {:.2} hidden\n",
                hidden, self.min_confidence
            ));
        }

        // Perspective summary
        text.push_str(&Self::section_header("Perspectives"));
        for (perspective, count) in &report.perspective_summary {
            let count_text = if *count == 0 {
                "0 claims".yellow().to_string()
            } else {
                format!("{} claim(s)", count)
            };
            text.push_str(&format!("  {:<24} {}\n", perspective, count_text));
        }
        text.push_str(&format!(
            "\n  {} duplicate(s) dropped during synthesis\n",
            report.dropped_duplicates
        ));

        text
    }

    fn format_json(&self, output: &RunCouncilOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
