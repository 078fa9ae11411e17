pub mod approx_eq;
pub mod color;
pub mod vector;

pub use color::Color;
pub use vector::Vector;
