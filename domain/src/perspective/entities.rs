//! Perspective value objects

use serde::{Deserialize, Serialize};

/// An immutable descriptor of one critique viewpoint
///
/// Carries no logic — it parameterizes generation calls and labels the
/// claims that come back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPerspective {
    /// Stable identifier (e.g., "logician")
    pub id: String,
    /// Human-readable name (e.g., "The Logician")
    pub name: String,
    /// The analytical area this perspective covers, used as the claim label
    pub area: String,
    /// Instruction template injected into generation calls
    pub instructions: String,
}

impl AgentPerspective {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        area: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            area: area.into(),
            instructions: instructions.into(),
        }
    }
}

impl std::fmt::Display for AgentPerspective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_id() {
        let p = AgentPerspective::new("logician", "The Logician", "Logical Rigor", "...");
        assert_eq!(p.to_string(), "logician");
    }
}
