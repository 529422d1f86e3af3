//! Shareable metadata for `namewright_core::lang` registries.
//!
//! Every vocabulary in `namewright_core::lang` is **registry-first**: a stable id enum plus a
//! `const` table of spellings. This submodule holds the metadata shape and the lookup helper
//! that all of those tables reuse.
//!
//! ## Notes
//! - Configuration tokens are matched **case-insensitively** (ASCII) after trimming, so
//!   `Camel_Case` and ` camel_case ` resolve to the same id.
//! - An unknown spelling is never an error here. Callers decide whether to ignore it (the
//!   configuration reader does).
//!
//! ## See also
//! - [`crate::lang::symbol_kinds`]
//! - [`crate::lang::accessibility`]
//! - [`crate::lang::modifiers`]

/// Shared metadata shape for a configuration token.
///
/// ## Notes
/// - `canonical` is the spelling written back out by serializers and docs.
/// - `aliases` are alternative spellings accepted on input (e.g. `friend` for `internal`).
/// - This type is `Copy` so registries can live in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct TokenInfo<Id: 'static> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl<Id: Copy> TokenInfo<Id> {
    /// Check whether `spelling` names this entry (canonical or alias).
    pub fn matches(&self, spelling: &str) -> bool {
        self.canonical.eq_ignore_ascii_case(spelling) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(spelling))
    }
}

/// Spelling used by every comma-list in the configuration surface to mean "all of them".
pub const WILDCARD: &str = "*";

/// Resolve a spelling against a registry table.
///
/// ## Parameters
/// - `table`: the registry to search.
/// - `spelling`: candidate spelling; surrounding whitespace is ignored.
///
/// ## Returns
/// - `Some(id)` for the first entry whose canonical spelling or alias matches.
/// - `None` otherwise.
pub fn lookup<Id: Copy>(table: &[TokenInfo<Id>], spelling: &str) -> Option<Id> {
    let spelling = spelling.trim();
    table.iter().find(|t| t.matches(spelling)).map(|t| t.id)
}

/// Return the canonical spelling of `id` in `table`.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn canonical<Id: Copy + PartialEq>(table: &[TokenInfo<Id>], id: Id) -> &'static str {
    table
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.canonical)
        .expect("INVARIANT: registry entry missing")
}

/// Parse a comma-separated token list.
///
/// ## Parameters
/// - `table`: the registry to resolve entries against.
/// - `list`: raw configuration value, e.g. `"public, internal"`.
///
/// ## Returns
/// - [`TokenList::All`] when the whole value is `*`.
/// - [`TokenList::Some`] with the recognized ids otherwise, in input order and without
///   duplicates. Unrecognized entries are dropped.
pub fn parse_list<Id: Copy + PartialEq>(table: &[TokenInfo<Id>], list: &str) -> TokenList<Id> {
    if list.trim() == WILDCARD {
        return TokenList::All;
    }
    let mut ids = Vec::new();
    for entry in list.split(',') {
        match lookup(table, entry) {
            Some(id) if !ids.contains(&id) => ids.push(id),
            _ => {}
        }
    }
    TokenList::Some(ids)
}

/// Result of parsing a comma-separated token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenList<Id> {
    /// The value was the `*` wildcard.
    All,
    /// Explicit entries (possibly empty).
    Some(Vec<Id>),
}

impl<Id: Copy> TokenList<Id> {
    /// Expand the list, substituting `all` for the wildcard.
    pub fn expand(self, all: &[Id]) -> Vec<Id> {
        match self {
            TokenList::All => all.to_vec(),
            TokenList::Some(ids) => ids,
        }
    }
}
