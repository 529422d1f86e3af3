//! Persisted form of a rule set: three ordered lists plus severities, as JSON.
//!
//! ## Notes
//! - Rule order is the list order, so a round trip preserves match order exactly.
//! - Reconstruction goes through [`NamingStylePreferences::new`]; dangling ids are rejected.
//!
//! ## Examples
//! ```rust
//! use namewright::naming::{serialized, NamingStylePreferences};
//!
//! let builtin = NamingStylePreferences::builtin();
//! let json = serialized::to_json(builtin).unwrap();
//! assert_eq!(&serialized::from_json(&json).unwrap(), builtin);
//! ```

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::preferences::{NamingStylePreferences, PreferencesError};
use super::rule::NamingRule;
use super::specification::SymbolSpecification;
use super::style::NamingStyle;

/// Errors from reading or writing the serialized form.
#[derive(Debug, Error, Diagnostic)]
pub enum SerializedError {
    #[error("malformed serialized rule set: {0}")]
    #[diagnostic(code(namewright::serialized::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Preferences(#[from] PreferencesError),
}

/// Wire representation of [`NamingStylePreferences`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedPreferences {
    pub specifications: Vec<SymbolSpecification>,
    pub styles: Vec<NamingStyle>,
    pub rules: Vec<NamingRule>,
}

impl From<&NamingStylePreferences> for SerializedPreferences {
    fn from(preferences: &NamingStylePreferences) -> Self {
        Self {
            specifications: preferences.specifications().to_vec(),
            styles: preferences.styles().to_vec(),
            rules: preferences.rules().to_vec(),
        }
    }
}

impl TryFrom<SerializedPreferences> for NamingStylePreferences {
    type Error = PreferencesError;

    fn try_from(serialized: SerializedPreferences) -> Result<Self, Self::Error> {
        NamingStylePreferences::new(serialized.specifications, serialized.styles, serialized.rules)
    }
}

/// Render a rule set as pretty-printed JSON.
pub fn to_json(preferences: &NamingStylePreferences) -> Result<String, SerializedError> {
    Ok(serde_json::to_string_pretty(&SerializedPreferences::from(preferences))?)
}

/// Rebuild a rule set from its JSON form.
pub fn from_json(json: &str) -> Result<NamingStylePreferences, SerializedError> {
    let serialized: SerializedPreferences = serde_json::from_str(json)?;
    Ok(NamingStylePreferences::try_from(serialized)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn dangling_rule_is_rejected_on_load() {
        let json = format!(
            r#"{{"specifications": [], "styles": [], "rules": [
                {{"specification_id": "{}", "style_id": "{}", "severity": "error"}}
            ]}}"#,
            Uuid::nil(),
            Uuid::nil()
        );
        let err = from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            SerializedError::Preferences(PreferencesError::UnknownSpecification { index: 0, .. })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(from_json("{").unwrap_err(), SerializedError::Json(_)));
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{
            "specifications": [{"id": "00000000-0000-0000-0000-000000000001", "name": "all"}],
            "styles": [{"id": "00000000-0000-0000-0000-000000000002", "name": "p", "capitalization": "pascal_case"}],
            "rules": [{"specification_id": "00000000-0000-0000-0000-000000000001",
                       "style_id": "00000000-0000-0000-0000-000000000002"}]
        }"#;
        let prefs = from_json(json).unwrap();
        assert!(prefs.specifications()[0].applicable_kinds.is_empty());
        assert_eq!(prefs.styles()[0].prefix, "");
        assert_eq!(prefs.rules()[0].severity, Default::default());
    }
}
