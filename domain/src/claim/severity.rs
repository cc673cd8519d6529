//! Claim severity ordinal

use serde::{Deserialize, Serialize};

/// How severe a claim's issue would be if it holds
///
/// Ordered: `Low < Medium < High < Critical`. The derived `Ord` follows
/// declaration order, so severity can be compared directly and used as a
/// ranking tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Numeric rank for sorting (Low = 0 .. Critical = 3)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Low => 0,
            Severity::Medium => 1,
            Severity::High => 2,
            Severity::Critical => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Parse generator output leniently
    ///
    /// Case-insensitive; unknown or missing labels default to `Medium`
    /// rather than failing the whole claim.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" | "minor" => Severity::Low,
            "high" | "major" => Severity::High,
            "critical" | "blocker" => Severity::Critical,
            _ => Severity::Medium,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Medium
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_rank() {
        assert_eq!(Severity::Low.rank(), 0);
        assert_eq!(Severity::Critical.rank(), 3);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Severity::parse_lenient("HIGH"), Severity::High);
        assert_eq!(Severity::parse_lenient("Critical"), Severity::Critical);
        assert_eq!(Severity::parse_lenient("minor"), Severity::Low);
        assert_eq!(Severity::parse_lenient("???"), Severity::Medium);
        assert_eq!(Severity::parse_lenient(""), Severity::Medium);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, r#""high""#);
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::High);
    }
}
