//! Dynamically typed values.

mod object;
mod value;

pub use object::Object;
pub use value::Value;
