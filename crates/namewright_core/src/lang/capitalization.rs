//! Capitalization schemes a naming style can require.
//!
//! ## Examples
//! ```rust
//! use namewright_core::lang::capitalization::{self, Capitalization};
//!
//! assert_eq!(capitalization::from_str("camel_case"), Some(Capitalization::CamelCase));
//! assert_eq!(capitalization::as_str(Capitalization::AllUpper), "all_upper");
//! ```

use super::registry::{self, TokenInfo};

/// Stable identifier for a capitalization scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capitalization {
    /// `FirstSecondThird`
    PascalCase,
    /// `firstSecondThird`
    CamelCase,
    /// `First second third`
    FirstWordUpper,
    /// `FIRST SECOND THIRD`
    AllUpper,
    /// `first second third`
    AllLower,
}

/// Registry of capitalization tokens.
pub const CAPITALIZATIONS: &[TokenInfo<Capitalization>] = &[
    TokenInfo {
        id: Capitalization::PascalCase,
        canonical: "pascal_case",
        aliases: &[],
        description: "Every word starts with an upper-case letter.",
    },
    TokenInfo {
        id: Capitalization::CamelCase,
        canonical: "camel_case",
        aliases: &[],
        description: "Every word but the first starts with an upper-case letter.",
    },
    TokenInfo {
        id: Capitalization::FirstWordUpper,
        canonical: "first_word_upper",
        aliases: &[],
        description: "Only the first letter of the first word is upper-case.",
    },
    TokenInfo {
        id: Capitalization::AllUpper,
        canonical: "all_upper",
        aliases: &[],
        description: "Every letter is upper-case.",
    },
    TokenInfo {
        id: Capitalization::AllLower,
        canonical: "all_lower",
        aliases: &[],
        description: "Every letter is lower-case.",
    },
];

/// Resolve a token to a [`Capitalization`].
pub fn from_str(token: &str) -> Option<Capitalization> {
    registry::lookup(CAPITALIZATIONS, token)
}

/// Return the canonical token for a [`Capitalization`].
pub fn as_str(id: Capitalization) -> &'static str {
    registry::canonical(CAPITALIZATIONS, id)
}
