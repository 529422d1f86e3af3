//! Shared vocabulary and text helpers for the namewright naming engine.
//!
//! This crate is intentionally small and dependency-light. It contains deterministic helpers that both:
//! - the rule engine uses to parse configuration tokens and check declared names, and
//! - the name suggester uses to turn type names into candidate identifiers.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no semantic-model types.
//! - Current scope: word breaking, pluralization, and the registry tables (configuration tokens,
//!   reserved keywords, predefined types, well-known generic shapes).
//! - The optional `serde` feature derives `Serialize`/`Deserialize` for the registry ids.

pub mod lang;
pub mod plural;
pub mod words;

pub use words::{Word, WordBreaker, word_groupings};
