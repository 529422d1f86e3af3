//! Type vocabularies consulted by type decomposition.
//!
//! ## Notes
//! - These registries are vocabulary only: spellings + metadata, not type-system semantics.
//!
//! ## See also
//! - [`crate::lang::registry`] for shared metadata types

pub mod predefined;
pub mod shapes;

pub use predefined::{PREDEFINED_TYPES, PredefinedTypeId, PredefinedTypeInfo};
pub use shapes::{GenericShape, SHAPES, ShapeInfo};
