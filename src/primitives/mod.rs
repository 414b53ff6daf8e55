//! Floating-point geometric primitives and operations.
//!
//! Points and vectors are distinct types: subtracting two points yields a
//! [`Vec2`], and a point can be moved by adding a vector.

mod point2;
mod vec2;

pub use point2::Point2;
pub use vec2::Vec2;
