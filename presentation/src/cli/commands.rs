//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for council results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with execution log
    Full,
    /// Only the ranked report
    Report,
    /// JSON output
    Json,
}

/// CLI arguments for critique-council
#[derive(Parser, Debug)]
#[command(name = "critique-council")]
#[command(author, version, about = "Critique Council - independent perspectives critique, arbitrate, synthesize")]
#[command(long_about = r#"
Critique Council runs a cohort of independent critique perspectives over a
piece of content and synthesizes one ranked, deduplicated report.

The process has three stages:
1. Fan-Out: every perspective critiques the content in parallel, optionally
   decomposing it into sub-points first
2. Arbitration: an impartial adjudicator reviews all claims together and
   proposes confidence/severity adjustments plus an overall score
3. Synthesis: claims are merged, adjusted, deduplicated, and ranked

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/critique-council/config.toml   Global config

Example:
  critique-council "System X crashes under load."
  critique-council --file essay.md --cohort scientific_methodology
  critique-council --dry-run --output json "Some content"
"#)]
pub struct Cli {
    /// The content to critique (or use --file)
    pub content: Option<String>,

    /// Read the content from a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "content")]
    pub file: Option<PathBuf>,

    /// Perspective cohort to run (built-in: philosophical, scientific_methodology)
    #[arg(long, value_name = "NAME")]
    pub cohort: Option<String>,

    /// Decomposition depth ceiling (0 = flat run)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Skip the self-critique pass
    #[arg(long)]
    pub no_self_critique: bool,

    /// Use the deterministic offline generator (no external command)
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "report")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["critique-council", "some content"]).unwrap();
        assert_eq!(cli.content.as_deref(), Some("some content"));
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_content_and_file_conflict() {
        let result =
            Cli::try_parse_from(["critique-council", "content", "--file", "essay.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "critique-council",
            "--dry-run",
            "--cohort",
            "scientific_methodology",
            "--max-depth",
            "0",
            "-vv",
            "content",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.cohort.as_deref(), Some("scientific_methodology"));
        assert_eq!(cli.max_depth, Some(0));
        assert_eq!(cli.verbose, 2);
    }
}
