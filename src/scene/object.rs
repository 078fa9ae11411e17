pub mod material;
pub mod sphere;
