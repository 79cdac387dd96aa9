//! Type builder implementations for different storage strategies.
//!
//! - [`ArenaBuilder`]: Arena-based allocation, `Copy` handles
//! - [`BoxBuilder`]: RC-based allocation, suitable for simpler use cases
//! - [`ArcBuilder`]: Like `BoxBuilder`, but types can be shared across threads

mod arc_builder;
mod arena_builder;
mod box_builder;

pub use arc_builder::ArcBuilder;
pub use arena_builder::ArenaBuilder;
pub use box_builder::BoxBuilder;
