//! Predefined (keyword-spelled) types of the target language.
//!
//! Each entry records the keyword spelling, the runtime type's simple name (used when the type is
//! word-broken), and whether a name can sensibly be derived from it.
//!
//! ## Notes
//! - Numeric types, `bool` and `char` are **not nameable**: `int $$` suggests nothing.
//! - `string`, `decimal` and `object` are nameable through their runtime names (`String`, ...).
//! - Lookup accepts the keyword spelling and the runtime simple name, case-sensitively.
//!
//! ## Examples
//! ```rust
//! use namewright_core::lang::types::predefined::{self, PredefinedTypeId};
//!
//! assert_eq!(predefined::from_str("int"), Some(PredefinedTypeId::Int));
//! assert_eq!(predefined::from_str("Int32"), Some(PredefinedTypeId::Int));
//! assert!(!predefined::is_nameable(PredefinedTypeId::Int));
//! assert_eq!(predefined::runtime_name(PredefinedTypeId::String), "String");
//! ```

/// Stable identifier for predefined types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PredefinedTypeId {
    Bool,
    Byte,
    SByte,
    Char,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    Decimal,
    String,
    Object,
}

/// Metadata for a predefined type.
#[derive(Debug, Clone, Copy)]
pub struct PredefinedTypeInfo {
    pub id: PredefinedTypeId,
    /// Keyword spelling (`int`).
    pub keyword: &'static str,
    /// Runtime simple name (`Int32`).
    pub runtime_name: &'static str,
    pub nameable: bool,
}

/// Registry of predefined types.
pub const PREDEFINED_TYPES: &[PredefinedTypeInfo] = &[
    scalar(PredefinedTypeId::Bool, "bool", "Boolean"),
    scalar(PredefinedTypeId::Byte, "byte", "Byte"),
    scalar(PredefinedTypeId::SByte, "sbyte", "SByte"),
    scalar(PredefinedTypeId::Char, "char", "Char"),
    scalar(PredefinedTypeId::Short, "short", "Int16"),
    scalar(PredefinedTypeId::UShort, "ushort", "UInt16"),
    scalar(PredefinedTypeId::Int, "int", "Int32"),
    scalar(PredefinedTypeId::UInt, "uint", "UInt32"),
    scalar(PredefinedTypeId::Long, "long", "Int64"),
    scalar(PredefinedTypeId::ULong, "ulong", "UInt64"),
    scalar(PredefinedTypeId::Float, "float", "Single"),
    scalar(PredefinedTypeId::Double, "double", "Double"),
    nameable(PredefinedTypeId::Decimal, "decimal", "Decimal"),
    nameable(PredefinedTypeId::String, "string", "String"),
    nameable(PredefinedTypeId::Object, "object", "Object"),
];

/// Resolve a keyword spelling or runtime name.
pub fn from_str(name: &str) -> Option<PredefinedTypeId> {
    PREDEFINED_TYPES
        .iter()
        .find(|t| t.keyword == name || t.runtime_name == name)
        .map(|t| t.id)
}

/// Return the full metadata entry.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PredefinedTypeId) -> &'static PredefinedTypeInfo {
    PREDEFINED_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("INVARIANT: predefined type info missing")
}

/// Return the keyword spelling.
pub fn as_str(id: PredefinedTypeId) -> &'static str {
    info_for(id).keyword
}

/// Return the runtime simple name.
pub fn runtime_name(id: PredefinedTypeId) -> &'static str {
    info_for(id).runtime_name
}

/// Whether a name can be derived from this type.
pub fn is_nameable(id: PredefinedTypeId) -> bool {
    info_for(id).nameable
}

const fn scalar(id: PredefinedTypeId, keyword: &'static str, runtime_name: &'static str) -> PredefinedTypeInfo {
    PredefinedTypeInfo {
        id,
        keyword,
        runtime_name,
        nameable: false,
    }
}

const fn nameable(id: PredefinedTypeId, keyword: &'static str, runtime_name: &'static str) -> PredefinedTypeInfo {
    PredefinedTypeInfo {
        id,
        keyword,
        runtime_name,
        nameable: true,
    }
}
