//! Declaration modifier vocabulary.
//!
//! Two audiences read this registry:
//! - the configuration reader, for `naming_symbols.<spec>.required_modifiers` (only
//!   *requirable* modifiers are accepted there), and
//! - the declaration-site model, which records everything already written before the name
//!   (`virtual`, `override`, ... included).
//!
//! ## Notes
//! - `*` in `required_modifiers` means "no modifier required". Expanding it to the full set
//!   would demand mutually exclusive modifiers (`abstract` and `const`) that no symbol carries.
//!
//! ## Examples
//! ```rust
//! use namewright_core::lang::modifiers::{self, ModifierId};
//!
//! assert_eq!(modifiers::from_str("shared"), Some(ModifierId::Static));
//! assert_eq!(modifiers::parse_required("must_inherit, virtual"), vec![ModifierId::Abstract]);
//! ```

use super::registry::{self, TokenInfo, TokenList};

/// Stable identifier for a declaration modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModifierId {
    Abstract,
    Async,
    Const,
    ReadOnly,
    Static,
    Virtual,
    Override,
    Sealed,
}

impl ModifierId {
    /// Bit used by declaration-modifier sets.
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Metadata for a modifier.
#[derive(Debug, Clone, Copy)]
pub struct ModifierInfo {
    pub token: TokenInfo<ModifierId>,
    /// Whether `required_modifiers` may name this modifier.
    pub requirable: bool,
}

/// Registry of modifiers.
pub const MODIFIERS: &[ModifierInfo] = &[
    info(ModifierId::Abstract, "abstract", &["must_inherit"], true),
    info(ModifierId::Async, "async", &[], true),
    info(ModifierId::Const, "const", &[], true),
    info(ModifierId::ReadOnly, "readonly", &[], true),
    info(ModifierId::Static, "static", &["shared"], true),
    info(ModifierId::Virtual, "virtual", &["overridable"], false),
    info(ModifierId::Override, "override", &["overrides"], false),
    info(ModifierId::Sealed, "sealed", &["not_overridable"], false),
];

const REQUIRABLE: &[TokenInfo<ModifierId>] = &[
    MODIFIERS[0].token,
    MODIFIERS[1].token,
    MODIFIERS[2].token,
    MODIFIERS[3].token,
    MODIFIERS[4].token,
];

/// Resolve any modifier spelling.
pub fn from_str(token: &str) -> Option<ModifierId> {
    let token = token.trim();
    MODIFIERS.iter().find(|m| m.token.matches(token)).map(|m| m.token.id)
}

/// Return the canonical spelling of a modifier.
pub fn as_str(id: ModifierId) -> &'static str {
    MODIFIERS
        .iter()
        .find(|m| m.token.id == id)
        .map(|m| m.token.canonical)
        .expect("INVARIANT: modifier info missing")
}

/// Whether `required_modifiers` accepts this modifier.
pub fn is_requirable(id: ModifierId) -> bool {
    MODIFIERS.iter().any(|m| m.token.id == id && m.requirable)
}

/// Parse a `required_modifiers` value.
///
/// ## Returns
/// - The recognized requirable modifiers in input order. `*` and empty input both yield an empty
///   list (no requirement); non-requirable and unknown spellings are dropped.
pub fn parse_required(value: &str) -> Vec<ModifierId> {
    match registry::parse_list(REQUIRABLE, value) {
        TokenList::All => Vec::new(),
        TokenList::Some(ids) => ids,
    }
}

const fn info(
    id: ModifierId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    requirable: bool,
) -> ModifierInfo {
    ModifierInfo {
        token: TokenInfo {
            id,
            canonical,
            aliases,
            description: "",
        },
        requirable,
    }
}
