//! Reserved words of the target language and its verbatim-identifier convention.
//!
//! Suggested names are escaped with [`VERBATIM_PREFIX`] when they collide with a reserved word
//! (`class` becomes `@class`). Contextual keywords (`var`, `async`, `value`, ...) are valid
//! identifiers and are not escaped.
//!
//! ## Examples
//! ```rust
//! use namewright_core::lang::keywords;
//!
//! assert!(keywords::is_reserved("class"));
//! assert_eq!(keywords::escape_identifier("string"), "@string");
//! assert_eq!(keywords::escape_identifier("builder"), "builder");
//! ```

use std::borrow::Cow;

/// Prefix that turns a reserved word into an ordinary identifier.
pub const VERBATIM_PREFIX: char = '@';

/// Reserved keywords (never usable as plain identifiers).
pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class", "const",
    "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event", "explicit", "extern",
    "false", "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in", "int", "interface",
    "internal", "is", "lock", "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof",
    "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong",
    "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile", "while",
];

/// Check whether an identifier is a reserved keyword (case-sensitive).
pub fn is_reserved(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

/// Escape `name` with the verbatim prefix if it is a reserved keyword.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if is_reserved(name) {
        Cow::Owned(format!("{VERBATIM_PREFIX}{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Strip a leading verbatim prefix, if any.
pub fn unescape_identifier(name: &str) -> &str {
    name.strip_prefix(VERBATIM_PREFIX).unwrap_or(name)
}
