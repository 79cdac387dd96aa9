//! Type traversal utilities.
//!
//! - [`Children`]: the immediate child types of a node
//! - [`Traverse`]: a lazy depth-first, pre-order walk over all nested types
//! - [`CompositeType`]: the capability of exposing that walk
//!
//! # Example
//!
//! ```
//! use kindred_types::{BoxBuilder, ty};
//! use kindred_types::core::traversal::CompositeType;
//!
//! let b = BoxBuilder::new();
//! let boxed = ty!(b, "Box"[T = ("List"[E = "Item"])]);
//! let names: Vec<String> = boxed.traverse().map(|t| t.to_string()).collect();
//! assert_eq!(names, ["List<Item>", "Item"]);
//! ```

mod children;
mod traverse;

pub use children::Children;
pub use traverse::{CompositeType, Traverse};
