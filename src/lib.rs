#![forbid(unsafe_code)]
//! Naming-convention engine and declaration name suggester.
//!
//! Given the type written at a declaration site, propose identifiers built from that type's name
//! (`MyClass` suggests `myClass`, `my`, `@class`, `MyClass`, `GetMyClass`, ...), styled by
//! configurable naming rules. The same rules check names that are already written.
//!
//! ## Modules
//!
//! - `naming` - Styles, symbol specifications, ordered rule sets and their configuration forms
//! - `suggest` - Type decomposition and ranked name candidates
//! - `cli` - The `namewright` command line
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a logic error in this crate, use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod naming;
pub mod suggest;
pub mod version;

pub use naming::{NamingStyle, NamingStylePreferences, SymbolDescriptor, SymbolSpecification};
pub use suggest::{Candidate, DeclarationContext, DeclarationNameCompletion, DeclarationNameSuggester, TypeRef};
