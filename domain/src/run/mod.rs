//! Council run domain
//!
//! Stage transitions, the execution log, and the per-branch result/error
//! types that carry recoverable failures as data instead of exceptions.

pub mod log;
pub mod result;
pub mod stage;

pub use log::{ExecutionLog, LogRecord};
pub use result::{AgentError, AgentErrorKind, AgentResult};
pub use stage::Stage;
