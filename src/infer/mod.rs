// src/infer/mod.rs
//! Facts the page does not state outright: board coordinates (from traversal
//! position) and the face value of daily doubles (from round, depth and air date).
pub mod location;
pub mod value;

pub use location::place;
pub use value::fill_values;
