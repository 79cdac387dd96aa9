//! Kindred - class types with generics, and the rules relating them
//!
//! # Overview
//!
//! Kindred describes the types a value mapper, validator or serializer works
//! with: named classes (optionally generic, optionally with a parent class),
//! unions, arrays, scalars, and the open `mixed` and `object` types. It answers
//! two questions:
//!
//! - **accepts**: does this runtime value belong to this type?
//! - **matches**: can a value of that type be used where this type is expected?
//!
//! Types are built once, never mutated, and shared by handle.
//!
//! # Quick Start
//!
//! ```
//! use kindred::{BoxBuilder, ClassRegistry, ClassType, ty};
//! use kindred::values::{Object, Value};
//!
//! // Declare the class hierarchy known to the host application.
//! let mut classes = ClassRegistry::new();
//! classes.declare("Animal", []).unwrap();
//! classes.declare("Dog", ["Animal"]).unwrap();
//!
//! // Build types.
//! let b = BoxBuilder::new();
//! let animal = ClassType::named(&b, "Animal");
//! let kennel = ty!(b, "Kennel"[T = ("List"[E = "Dog"])]);
//! assert_eq!(kennel.to_string(), "Kennel<List<Dog>>");
//!
//! // Compatibility between types.
//! assert!(animal.matches(&classes, &ty!(b, "Dog")));
//! assert!(!animal.matches(&classes, &ty!(b, Union["Dog", Str])));
//!
//! // Membership of runtime values.
//! let rex = Value::object(Object::empty("Dog"));
//! assert!(animal.accepts(&classes, &rex));
//! ```
//!
//! # Storage
//!
//! Types are allocated through a [`TyBuilder`]:
//!
//! 1. [`BoxBuilder`]: `Rc` handles, the simplest choice
//! 2. [`ArcBuilder`]: `Arc` handles, types can cross threads
//! 3. [`ArenaBuilder`]: `bumpalo` arena, `Copy` handles tied to the arena

pub use kindred_types::{
    ArcBuilder, ArenaBuilder, BoxBuilder, ClassRegistry, ClassType, CompositeType, GenericList,
    Hierarchy, NoHierarchy, ObjectType, Relation, RuntimeValue, Scalar, Ty, TyBuilder, TyKind,
    TyList, ty,
};
pub use kindred_types::{hierarchy, relation};

/// Runtime values.
pub mod values {
    pub use kindred_values::dynamic::{Object, Value};
}
