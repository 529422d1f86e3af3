//! Naming vocabulary registries.
//!
//! This module is the "front door" for every fixed spelling the naming engine understands:
//! configuration tokens (symbol kinds, visibilities, modifiers, capitalization schemes,
//! severities), the target language's reserved keywords, and the well-known type names that
//! type decomposition recognizes.
//!
//! The design goal is to avoid stringly-typed checks scattered across the engine. Callers work
//! with **stable IDs** (e.g. `SymbolKind`, `Accessibility`) and look up spellings via registry
//! tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use namewright_core::lang::symbol_kinds::{self, SymbolKind};
//!
//! assert_eq!(symbol_kinds::from_str("property"), Some(SymbolKind::Property));
//! assert_eq!(symbol_kinds::as_str(SymbolKind::Property), "property");
//! ```

pub mod accessibility;
pub mod capitalization;
pub mod keywords;
pub mod modifiers;
pub mod registry;
pub mod severity;
pub mod symbol_kinds;
pub mod types;
