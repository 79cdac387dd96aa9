//! Runtime values inspected by Kindred types.
//!
//! Values are dynamically typed: an [`Object`](dynamic::Object) only knows the
//! name of its class, and whether it also belongs to a wider type is decided
//! by [`kindred_types`] against a class hierarchy.
//!
//! # Example
//!
//! ```
//! use kindred_types::{BoxBuilder, ClassRegistry, ty};
//! use kindred_values::dynamic::{Object, Value};
//!
//! let mut classes = ClassRegistry::new();
//! classes.declare("Animal", []).unwrap();
//! classes.declare("Dog", ["Animal"]).unwrap();
//!
//! let rex = Value::object(Object::new("Dog", [("name", Value::str("Rex"))]));
//!
//! let b = BoxBuilder::new();
//! assert!(ty!(b, "Animal").accepts(&classes, &rex));
//! assert!(!ty!(b, Str).accepts(&classes, &rex));
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod dynamic;
