//! Declaration name suggestion.
//!
//! Given a declaration site whose type is known but whose name is not yet written, propose
//! identifiers built from the type's name and styled by the naming rules in effect.
//!
//! ## Modules
//!
//! - `types` - The declaration-site model (type references, context, candidates)
//! - `decompose` - Type to word-sequence decomposition
//! - `cache` - Shared memo of decompositions
//! - `suggester` - Ranking, styling and filtering of candidates
//! - `completion` - Options and the caller-facing facade
//!
//! ## Examples
//! ```rust
//! use namewright::naming::NamingStylePreferences;
//! use namewright::suggest::{DeclarationContext, DeclarationNameSuggester, NamedType, TypeRef};
//! use namewright_core::lang::symbol_kinds::SymbolKind;
//!
//! let context = DeclarationContext::new(TypeRef::named(NamedType::new("MyClass")), [SymbolKind::Local]);
//! let names: Vec<String> = DeclarationNameSuggester::new(NamingStylePreferences::builtin())
//!     .suggest(&context)
//!     .into_iter()
//!     .map(|c| c.text)
//!     .collect();
//! assert_eq!(names, ["myClass", "my", "@class"]);
//! ```

pub mod cache;
pub mod completion;
pub mod decompose;
pub mod suggester;
pub mod types;

pub use cache::DecompositionCache;
pub use completion::{DeclarationNameCompletion, SuggestionOptions};
pub use decompose::{DecomposeOptions, MAX_UNWRAP_DEPTH, NameVariant, decompose};
pub use suggester::DeclarationNameSuggester;
pub use types::{Candidate, DeclarationContext, Glyph, NamedType, SUGGESTED_NAME, TypeKind, TypeRef};
