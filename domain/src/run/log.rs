//! Execution log
//!
//! An ordered list of stage-transition events for observability, independent
//! of the report content. The log itself is plain data; concurrent append is
//! the orchestrator's concern (it holds the log behind a mutex).

use super::stage::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One execution-log event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// Append-only, ordered execution log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionLog {
    records: Vec<LogRecord>,
}

impl ExecutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run-level event
    pub fn record(&mut self, stage: Stage, message: impl Into<String>) {
        self.records.push(LogRecord {
            stage,
            perspective_id: None,
            timestamp: Utc::now(),
            message: message.into(),
        });
    }

    /// Append an event attributed to one perspective
    pub fn record_for(
        &mut self,
        stage: Stage,
        perspective_id: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.records.push(LogRecord {
            stage,
            perspective_id: Some(perspective_id.into()),
            timestamp: Utc::now(),
            message: message.into(),
        });
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stages in the order they were first recorded
    pub fn stage_sequence(&self) -> Vec<Stage> {
        let mut stages = Vec::new();
        for record in &self.records {
            if stages.last() != Some(&record.stage) {
                stages.push(record.stage);
            }
        }
        stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_append() {
        let mut log = ExecutionLog::new();
        log.record(Stage::Initialized, "run created");
        log.record_for(Stage::FanningOut, "logician", "agent dispatched");
        log.record(Stage::Completed, "done");

        assert_eq!(log.len(), 3);
        assert_eq!(log.records()[1].perspective_id.as_deref(), Some("logician"));
    }

    #[test]
    fn test_stage_sequence_collapses_repeats() {
        let mut log = ExecutionLog::new();
        log.record(Stage::FanningOut, "a");
        log.record(Stage::FanningOut, "b");
        log.record(Stage::Arbitrating, "c");

        assert_eq!(
            log.stage_sequence(),
            vec![Stage::FanningOut, Stage::Arbitrating]
        );
    }
}
