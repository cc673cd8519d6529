//! Output formatter trait

use council_application::RunCouncilOutput;
use council_domain::SynthesisReport;

/// Trait for formatting council results
pub trait OutputFormatter {
    /// Format the complete output, including the execution log
    fn format(&self, output: &RunCouncilOutput) -> String;

    /// Format only the ranked report
    fn format_report(&self, report: &SynthesisReport) -> String;

    /// Format as JSON
    fn format_json(&self, output: &RunCouncilOutput) -> String;
}
