//! Enforcement severities for naming rules.
//!
//! ## Examples
//! ```rust
//! use namewright_core::lang::severity::{self, Severity};
//!
//! assert_eq!(severity::from_str("info"), Some(Severity::Suggestion));
//! assert!(Severity::Error > Severity::Warning);
//! ```

use super::registry::{self, TokenInfo};

/// Stable identifier for a severity level, ordered from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    /// Rule is configured but never reported.
    None,
    /// Reported to tooling only (no visible squiggle).
    Silent,
    #[default]
    Suggestion,
    Warning,
    Error,
}

/// Registry of severity tokens.
pub const SEVERITIES: &[TokenInfo<Severity>] = &[
    TokenInfo {
        id: Severity::None,
        canonical: "none",
        aliases: &[],
        description: "Never reported.",
    },
    TokenInfo {
        id: Severity::Silent,
        canonical: "silent",
        aliases: &["refactoring"],
        description: "Available to fixers, not shown.",
    },
    TokenInfo {
        id: Severity::Suggestion,
        canonical: "suggestion",
        aliases: &["info"],
        description: "Shown as a hint.",
    },
    TokenInfo {
        id: Severity::Warning,
        canonical: "warning",
        aliases: &[],
        description: "Shown as a warning.",
    },
    TokenInfo {
        id: Severity::Error,
        canonical: "error",
        aliases: &[],
        description: "Shown as an error.",
    },
];

/// Resolve a token to a [`Severity`].
pub fn from_str(token: &str) -> Option<Severity> {
    registry::lookup(SEVERITIES, token)
}

/// Return the canonical token for a [`Severity`].
pub fn as_str(id: Severity) -> &'static str {
    registry::canonical(SEVERITIES, id)
}
