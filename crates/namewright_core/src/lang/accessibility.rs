//! Declared-visibility vocabulary.
//!
//! Tokens accepted in `naming_symbols.<spec>.applicable_accessibilities`. Visual-Basic-style
//! spellings (`friend`, `protected_friend`) are aliases of their C#-style counterparts.
//!
//! ## Examples
//! ```rust
//! use namewright_core::lang::accessibility::{self, Accessibility};
//!
//! assert_eq!(accessibility::from_str("friend"), Some(Accessibility::Internal));
//! assert_eq!(accessibility::as_str(Accessibility::ProtectedInternal), "protected_internal");
//! ```

use super::registry::{self, TokenInfo};

/// Stable identifier for a visibility level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Accessibility {
    Public,
    Internal,
    Private,
    Protected,
    ProtectedInternal,
}

/// Registry of visibility tokens.
pub const ACCESSIBILITIES: &[TokenInfo<Accessibility>] = &[
    TokenInfo {
        id: Accessibility::Public,
        canonical: "public",
        aliases: &[],
        description: "Visible everywhere.",
    },
    TokenInfo {
        id: Accessibility::Internal,
        canonical: "internal",
        aliases: &["friend"],
        description: "Visible within the containing assembly.",
    },
    TokenInfo {
        id: Accessibility::Private,
        canonical: "private",
        aliases: &[],
        description: "Visible within the containing type.",
    },
    TokenInfo {
        id: Accessibility::Protected,
        canonical: "protected",
        aliases: &[],
        description: "Visible within the containing type and derived types.",
    },
    TokenInfo {
        id: Accessibility::ProtectedInternal,
        canonical: "protected_internal",
        aliases: &["protected_friend"],
        description: "Visible to derived types or within the containing assembly.",
    },
];

/// Every level `*` expands to.
pub const ALL: &[Accessibility] = &[
    Accessibility::Public,
    Accessibility::Internal,
    Accessibility::Private,
    Accessibility::Protected,
    Accessibility::ProtectedInternal,
];

/// Resolve a token to an [`Accessibility`].
pub fn from_str(token: &str) -> Option<Accessibility> {
    registry::lookup(ACCESSIBILITIES, token)
}

/// Return the canonical token for an [`Accessibility`].
pub fn as_str(id: Accessibility) -> &'static str {
    registry::canonical(ACCESSIBILITIES, id)
}

/// Parse an `applicable_accessibilities` value. `*` expands to [`ALL`].
pub fn parse_list(value: &str) -> Vec<Accessibility> {
    registry::parse_list(ACCESSIBILITIES, value).expand(ALL)
}
