pub mod intersection;

use crate::math::vector::Vector;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    origin: Vector,
    /// Expected to be of unit length, callers are responsible for that
    direction: Vector,
}

impl Ray {
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self { origin, direction }
    }

    pub fn position(&self, time: f64) -> Vector {
        self.origin + self.direction * time
    }
    pub fn origin(&self) -> &Vector {
        &self.origin
    }
    pub fn direction(&self) -> &Vector {
        &self.direction
    }
}
