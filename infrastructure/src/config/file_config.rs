//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the `council.toml` file.
//! They deserialize directly and convert into domain/application types on
//! demand.

use council_application::CouncilConfig;
use council_domain::{AgentPerspective, PerspectiveRegistry};
use serde::{Deserialize, Serialize};

/// Raw configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Council execution settings
    pub council: CouncilConfig,
    /// Cohort selection and custom cohort definitions
    pub cohort: FileCohortConfig,
    /// Generator command settings
    pub generator: FileGeneratorConfig,
}

/// Cohort selection from TOML
///
/// `active` names either a built-in cohort or a custom one defined in
/// `perspectives`. Custom perspectives, when present for the active name,
/// take precedence over built-ins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCohortConfig {
    /// Name of the active cohort
    pub active: String,
    /// Custom perspective definitions (optional)
    pub perspectives: Vec<FilePerspective>,
}

impl Default for FileCohortConfig {
    fn default() -> Self {
        Self {
            active: "philosophical".to_string(),
            perspectives: Vec::new(),
        }
    }
}

/// One custom perspective definition from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePerspective {
    pub id: String,
    pub name: String,
    pub area: String,
    pub instructions: String,
}

impl From<FilePerspective> for AgentPerspective {
    fn from(p: FilePerspective) -> Self {
        AgentPerspective::new(p.id, p.name, p.area, p.instructions)
    }
}

/// External completion command from TOML
///
/// The command receives the system prompt as its first argument and the
/// user prompt on stdin, and must print the model response to stdout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// Program to invoke for completions (required for live runs)
    pub command: Option<String>,
    /// Extra arguments passed before the system prompt
    pub args: Vec<String>,
}

impl FileConfig {
    /// Build the active perspective registry
    ///
    /// Custom perspectives win over built-ins for the same cohort name;
    /// an unknown name with no custom perspectives yields `None`.
    pub fn registry(&self) -> Option<PerspectiveRegistry> {
        if !self.cohort.perspectives.is_empty() {
            return Some(PerspectiveRegistry::new(
                self.cohort.active.clone(),
                self.cohort
                    .perspectives
                    .iter()
                    .cloned()
                    .map(AgentPerspective::from)
                    .collect(),
            ));
        }
        PerspectiveRegistry::builtin(&self.cohort.active)
    }
}
