//! Naming rules: which style governs which specification, and how loudly.

use namewright_core::lang::severity::Severity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::specification::SymbolSpecification;
use super::style::NamingStyle;

/// A `(specification, style, severity)` triple referencing its parts by id.
///
/// ## Notes
/// - Both ids must name entries of the same [`super::NamingStylePreferences`]; this is checked
///   when the preferences are constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRule {
    pub specification_id: Uuid,
    pub style_id: Uuid,
    #[serde(default)]
    pub severity: Severity,
}

impl NamingRule {
    pub fn new(specification: &SymbolSpecification, style: &NamingStyle, severity: Severity) -> Self {
        Self {
            specification_id: specification.id,
            style_id: style.id,
            severity,
        }
    }
}

/// A rule with its references resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRule<'p> {
    pub specification: &'p SymbolSpecification,
    pub style: &'p NamingStyle,
    pub severity: Severity,
}

/// A declared name that breaks the rule governing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingViolation {
    /// Name of the violated rule's specification.
    pub rule_name: String,
    pub style_name: String,
    pub severity: Severity,
    pub name: String,
    /// Compliant renderings, best first. May be empty when the name has no words.
    pub fixes: Vec<String>,
}
