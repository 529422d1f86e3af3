//! Well-known single-argument generic shapes recognized by type decomposition.
//!
//! This registry maps namespace-qualified generic type names (without arity) to the shape the
//! name suggester unwraps: collections (`IEnumerable<T>`, `List<T>`, ...), awaitables
//! (`Task<T>`, `ValueTask<T>`) and nullable wrappers (`Nullable<T>`).
//!
//! ## Notes
//! - A shape only applies to a generic instantiation with exactly one type argument; that rule
//!   is enforced by the caller, not here.
//! - Lookup by qualified name is exact and case-sensitive. [`from_simple_name`] exists for
//!   collaborators that cannot supply a namespace.
//!
//! ## Examples
//! ```rust
//! use namewright_core::lang::types::shapes::{self, GenericShape};
//!
//! assert_eq!(
//!     shapes::from_qualified_name("System.Collections.Generic.IEnumerable"),
//!     Some(GenericShape::Enumerable)
//! );
//! assert_eq!(shapes::from_simple_name("Task"), Some(GenericShape::Awaitable));
//! assert_eq!(shapes::from_simple_name("Dictionary"), None);
//! ```

/// Shape of a well-known generic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericShape {
    /// Sequence of `T`; names derived from it are pluralized.
    Enumerable,
    /// Eventually produces `T`.
    Awaitable,
    /// `T` or nothing.
    Nullable,
}

/// Metadata for a recognized generic type.
#[derive(Debug, Clone, Copy)]
pub struct ShapeInfo {
    pub shape: GenericShape,
    /// Namespace-qualified name without arity.
    pub qualified_name: &'static str,
}

impl ShapeInfo {
    /// The simple (last-segment) name.
    pub fn simple_name(&self) -> &'static str {
        self.qualified_name.rsplit('.').next().unwrap_or(self.qualified_name)
    }
}

/// Registry of recognized generic shapes.
pub const SHAPES: &[ShapeInfo] = &[
    enumerable("System.Collections.Generic.IEnumerable"),
    enumerable("System.Collections.Generic.ICollection"),
    enumerable("System.Collections.Generic.IList"),
    enumerable("System.Collections.Generic.IReadOnlyCollection"),
    enumerable("System.Collections.Generic.IReadOnlyList"),
    enumerable("System.Collections.Generic.List"),
    enumerable("System.Collections.Generic.ISet"),
    enumerable("System.Collections.Generic.HashSet"),
    enumerable("System.Collections.Generic.Queue"),
    enumerable("System.Collections.Generic.Stack"),
    enumerable("System.Collections.Immutable.ImmutableArray"),
    enumerable("System.Collections.Immutable.ImmutableList"),
    enumerable("System.Linq.IQueryable"),
    awaitable("System.Threading.Tasks.Task"),
    awaitable("System.Threading.Tasks.ValueTask"),
    ShapeInfo {
        shape: GenericShape::Nullable,
        qualified_name: "System.Nullable",
    },
];

/// Resolve a namespace-qualified generic name.
pub fn from_qualified_name(name: &str) -> Option<GenericShape> {
    SHAPES.iter().find(|s| s.qualified_name == name).map(|s| s.shape)
}

/// Resolve a bare simple name (no namespace available).
pub fn from_simple_name(name: &str) -> Option<GenericShape> {
    SHAPES.iter().find(|s| s.simple_name() == name).map(|s| s.shape)
}

const fn enumerable(qualified_name: &'static str) -> ShapeInfo {
    ShapeInfo {
        shape: GenericShape::Enumerable,
        qualified_name,
    }
}

const fn awaitable(qualified_name: &'static str) -> ShapeInfo {
    ShapeInfo {
        shape: GenericShape::Awaitable,
        qualified_name,
    }
}
