//! Naming rule engine.
//!
//! A rule set ([`NamingStylePreferences`]) is an ordered list of
//! `(SymbolSpecification, NamingStyle, Severity)` triples. The first rule whose specification
//! selects a declaration governs its name.
//!
//! ## Modules
//!
//! - `style` - Rendering words per capitalization/affix/separator, and the compliance check
//! - `specification` - Declaration predicates (kind, visibility, required modifiers)
//! - `rule` - Rule triples, resolved rules and violations
//! - `preferences` - Ordered rule sets, lookup and built-in conventions
//! - `editorconfig` - Reading rule sets from `key = value` configuration text
//! - `serialized` - The JSON persisted form

pub mod editorconfig;
pub mod preferences;
pub mod rule;
pub mod serialized;
pub mod specification;
pub mod style;

pub use editorconfig::{ConfigError, NamingConfig, parse_naming_config, read_naming_config};
pub use preferences::{NamingStylePreferences, PreferencesError};
pub use rule::{NamingRule, NamingViolation, ResolvedRule};
pub use serialized::{SerializedError, SerializedPreferences};
pub use specification::{DeclarationModifiers, SymbolDescriptor, SymbolSpecification};
pub use style::NamingStyle;
