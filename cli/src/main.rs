//! CLI entrypoint for Critique Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use council_application::{
    CritiqueGenerator, RunCouncilInput, RunCouncilOutput, RunCouncilUseCase,
};
use council_domain::Content;
use council_infrastructure::{
    CommandCompletion, ConfigLoader, PromptBackedGenerator, ScriptedGenerator,
};
use council_presentation::{Cli, ConsoleFormatter, OutputFormat, OutputFormatter, ProgressReporter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    if let Some(cohort) = &cli.cohort {
        file_config.cohort.active = cohort.clone();
    }
    let registry = file_config.registry().ok_or_else(|| {
        anyhow!(
            "unknown cohort '{}': use a built-in cohort or define its perspectives in council.toml",
            file_config.cohort.active
        )
    })?;

    let mut config = file_config.council.clone();
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if cli.no_self_critique {
        config.self_critique = false;
    }

    // === Content ===
    let text = match (&cli.content, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("Content is required: pass it as an argument or with --file."),
    };
    let content = Content::try_new(text).ok_or_else(|| anyhow!("content is empty"))?;

    info!(
        cohort = registry.cohort(),
        perspectives = registry.len(),
        max_depth = config.max_depth,
        "starting critique council"
    );

    let min_confidence = config.synthesis_confidence_threshold;
    let input = RunCouncilInput::new(content, registry).with_config(config.clone());

    // === Dependency Injection ===
    let output = if cli.dry_run {
        run_council(ScriptedGenerator::demo(), input, cli.quiet).await?
    } else {
        let command = file_config.generator.command.clone().ok_or_else(|| {
            anyhow!(
                "no generator command configured; set [generator].command in council.toml \
                 or use --dry-run"
            )
        })?;
        let completion =
            CommandCompletion::new(command).with_args(file_config.generator.args.clone());
        let generator = PromptBackedGenerator::new(completion, config.generator_timeout());
        run_council(generator, input, cli.quiet).await?
    };

    // === Rendering ===
    let formatter = ConsoleFormatter::new().with_min_confidence(min_confidence);
    match cli.output {
        OutputFormat::Full => println!("{}", formatter.format(&output)),
        OutputFormat::Report => println!("{}", formatter.format_report(&output.report)),
        OutputFormat::Json => println!("{}", formatter.format_json(&output)),
    }

    Ok(())
}

/// Run the council with or without progress bars
async fn run_council<G: CritiqueGenerator + 'static>(
    generator: G,
    input: RunCouncilInput,
    quiet: bool,
) -> Result<RunCouncilOutput> {
    let use_case = RunCouncilUseCase::new(Arc::new(generator));
    let output = if quiet {
        use_case.execute(input).await
    } else {
        let reporter = ProgressReporter::new();
        use_case.execute_with_progress(input, &reporter).await
    };
    output.context("council run failed")
}
