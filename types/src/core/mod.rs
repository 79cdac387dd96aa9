//! Core type system components.
//!
//! This module provides the fundamental building blocks for the type system:
//!
//! - [`TyBuilder`]: Trait for type allocation strategies
//! - [`Ty`] and [`TyNode`]: Type handles and their underlying nodes
//! - [`TyKind`]: The different kinds of types (classes, unions, scalars, etc.)
//! - [`ClassType`]: Named, possibly generic classes with their parent chain
//! - [`TyFlags`]: Cached type properties for efficient queries
//!
//! See the [`traversal`] submodule for walking nested types.

mod builder;
mod class;
mod flags;
mod kind;
pub mod traversal;
mod ty;

pub use builder::TyBuilder;
pub use class::{Ancestors, ClassType, NAMESPACE_SEPARATOR, ObjectType, normalize_class_name};
pub use flags::TyFlags;
pub use kind::{Scalar, TyKind};
pub use ty::{ClassRef, GenericList, Ident, Ty, TyList, TyNode};
