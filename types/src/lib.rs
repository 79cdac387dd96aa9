//! Kindred type system with pluggable type builders.
//!
//! This crate describes class-like types (with generic arguments and parent
//! classes) next to a small closed set of other kinds, and decides:
//!
//! - whether a runtime value belongs to a type ([`Ty::accepts`]),
//! - whether one type can be used where another is expected ([`Ty::matches`]).
//!
//! Types are immutable and built through a [`TyBuilder`], which decides how
//! nodes are stored (arena, `Rc`, `Arc`).
//!
//! # Example
//!
//! ```
//! use kindred_types::{BoxBuilder, ClassType, ty};
//! use kindred_types::hierarchy::NoHierarchy;
//!
//! let b = BoxBuilder::new();
//! let animal = ClassType::named(&b, "Animal");
//! let dog = ClassType::new::<&str>(&b, "Dog", [], Some(animal.clone())).alloc(&b);
//!
//! assert!(animal.matches(&NoHierarchy, &dog));
//! assert!(animal.matches(&NoHierarchy, &ty!(b, Mixed)));
//! assert!(!animal.matches(&NoHierarchy, &ty!(b, Str)));
//! ```

#![no_std]
extern crate alloc;

pub mod builders;
pub mod core;
pub mod display;
pub mod hierarchy;
mod macros;
pub mod relation;

pub use builders::{ArcBuilder, ArenaBuilder, BoxBuilder};
pub use self::core::{
    ClassType, GenericList, Ident, ObjectType, Scalar, Ty, TyBuilder, TyFlags, TyKind, TyList,
    TyNode,
};
pub use self::core::traversal::CompositeType;
pub use hierarchy::{ClassRegistry, Hierarchy, NoHierarchy};
pub use relation::{Relation, RuntimeValue};
