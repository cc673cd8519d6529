//! Progress reporting for council execution

use colored::Colorize;
use council_application::CouncilProgress;
use council_domain::Stage;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during council execution with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn stage_display_name(stage: &Stage) -> &'static str {
        match stage {
            Stage::FanningOut => "Stage 1: Perspective Fan-Out",
            Stage::Arbitrating => "Stage 2: Arbitration",
            Stage::Synthesizing => "Stage 3: Synthesis",
            other => other.display_name(),
        }
    }

    fn stage_short_name(stage: &Stage) -> &'static str {
        match stage {
            Stage::FanningOut => "Stage 1",
            Stage::Arbitrating => "Stage 2",
            Stage::Synthesizing => "Stage 3",
            other => other.as_str(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CouncilProgress for ProgressReporter {
    fn on_stage_start(&self, stage: &Stage, total_units: usize) {
        let stage_name = Self::stage_display_name(stage);

        let pb = self.multi.add(ProgressBar::new(total_units as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(stage_name.to_string());
        pb.set_message("Starting...");

        *self.stage_bar.lock().unwrap() = Some(pb);
    }

    fn on_unit_complete(&self, _stage: &Stage, unit: &str, success: bool) {
        if let Some(pb) = self.stage_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), unit)
            } else {
                format!("{} {}", "x".red(), unit)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: &Stage) {
        if let Some(pb) = self.stage_bar.lock().unwrap().take() {
            let stage_name = Self::stage_short_name(stage);
            pb.finish_with_message(format!("{} complete!", stage_name.green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl CouncilProgress for SimpleProgress {
    fn on_stage_start(&self, stage: &Stage, total_units: usize) {
        let stage_name = ProgressReporter::stage_display_name(stage);
        println!(
            "{} {} ({} unit{})",
            "->".cyan(),
            stage_name.bold(),
            total_units,
            if total_units == 1 { "" } else { "s" }
        );
    }

    fn on_unit_complete(&self, _stage: &Stage, unit: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), unit);
        } else {
            println!("  {} {} (failed)", "x".red(), unit);
        }
    }

    fn on_stage_complete(&self, _stage: &Stage) {
        println!();
    }
}
