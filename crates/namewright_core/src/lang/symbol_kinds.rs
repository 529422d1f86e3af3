//! Symbol and type categories a naming rule can target.
//!
//! One flat id enum covers both member-like categories (field, property, method, ...) and type
//! declarations (class, struct, interface, ...). The configuration tokens accepted in
//! `naming_symbols.<spec>.applicable_kinds` are the canonical spellings in [`SYMBOL_KINDS`].
//!
//! ## Examples
//! ```rust
//! use namewright_core::lang::symbol_kinds::{self, SymbolKind};
//!
//! assert_eq!(symbol_kinds::from_str("local_function"), Some(SymbolKind::LocalFunction));
//! assert_eq!(symbol_kinds::as_str(SymbolKind::Field), "field");
//! assert!(SymbolKind::LocalFunction.is_method_like());
//! ```

use super::registry::{self, TokenInfo, TokenList};

/// Stable identifier for a declaration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SymbolKind {
    // Types
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,

    // Members / locals
    Field,
    Property,
    Event,
    Method,
    LocalFunction,
    Parameter,
    Local,
    TypeParameter,
}

impl SymbolKind {
    /// Whether a name for this kind is a callable (`GetX`-style names apply).
    pub fn is_method_like(self) -> bool {
        matches!(self, SymbolKind::Method | SymbolKind::LocalFunction)
    }

    /// Whether this kind names a type declaration.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            SymbolKind::Class | SymbolKind::Struct | SymbolKind::Interface | SymbolKind::Enum | SymbolKind::Delegate
        )
    }
}

/// Registry of symbol-kind tokens.
///
/// ## Notes
/// - `local` and `type_parameter` are accepted in addition to the classic editorconfig set so
///   newer configuration files keep working.
pub const SYMBOL_KINDS: &[TokenInfo<SymbolKind>] = &[
    info(SymbolKind::Class, "class", "Class declarations."),
    info(SymbolKind::Struct, "struct", "Struct declarations."),
    info(SymbolKind::Interface, "interface", "Interface declarations."),
    info(SymbolKind::Enum, "enum", "Enum declarations."),
    info(SymbolKind::Property, "property", "Properties."),
    info(SymbolKind::Method, "method", "Ordinary methods."),
    info(SymbolKind::LocalFunction, "local_function", "Functions declared inside a method body."),
    info(SymbolKind::Field, "field", "Fields, including constants."),
    info(SymbolKind::Event, "event", "Events."),
    info(SymbolKind::Delegate, "delegate", "Delegate type declarations."),
    info(SymbolKind::Parameter, "parameter", "Method and lambda parameters."),
    info(SymbolKind::Local, "local", "Local variables."),
    info(SymbolKind::TypeParameter, "type_parameter", "Generic type parameters."),
];

/// Every kind `*` expands to, in registry order.
pub const ALL: &[SymbolKind] = &[
    SymbolKind::Class,
    SymbolKind::Struct,
    SymbolKind::Interface,
    SymbolKind::Enum,
    SymbolKind::Property,
    SymbolKind::Method,
    SymbolKind::LocalFunction,
    SymbolKind::Field,
    SymbolKind::Event,
    SymbolKind::Delegate,
    SymbolKind::Parameter,
    SymbolKind::Local,
    SymbolKind::TypeParameter,
];

/// Resolve a token to a [`SymbolKind`].
pub fn from_str(token: &str) -> Option<SymbolKind> {
    registry::lookup(SYMBOL_KINDS, token)
}

/// Return the canonical token for a [`SymbolKind`].
pub fn as_str(id: SymbolKind) -> &'static str {
    registry::canonical(SYMBOL_KINDS, id)
}

/// Parse an `applicable_kinds` value. `*` expands to [`ALL`]; unknown entries are dropped.
pub fn parse_list(value: &str) -> Vec<SymbolKind> {
    registry::parse_list(SYMBOL_KINDS, value).expand(ALL)
}

/// Parse an `applicable_kinds` value without expanding the wildcard.
pub fn parse_list_raw(value: &str) -> TokenList<SymbolKind> {
    registry::parse_list(SYMBOL_KINDS, value)
}

const fn info(id: SymbolKind, canonical: &'static str, description: &'static str) -> TokenInfo<SymbolKind> {
    TokenInfo {
        id,
        canonical,
        aliases: &[],
        description,
    }
}
