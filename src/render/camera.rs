use crate::{math::vector::Vector, render::ray::Ray};

// camera sits at `origin` and looks toward +z direction
// with +y up and +x on the right, screen plane lies at z = 1
#[derive(PartialEq, Debug, Clone)]
pub struct Camera {
    target_width: usize,
    target_height: usize,
    field_of_view: f64,
    origin: Vector,

    /// half of the screen plane's height
    screen_dim: f64,
    aspect_ratio: f64,
}

impl Camera {
    pub fn new(target_width: usize, target_height: usize, field_of_view: f64) -> Self {
        Self::with_origin(target_width, target_height, field_of_view, Vector::zero())
    }

    pub fn with_origin(
        target_width: usize,
        target_height: usize,
        field_of_view: f64,
        origin: Vector,
    ) -> Self {
        assert!(target_width > 0 && target_height > 0);
        let screen_dim = (field_of_view / 2.).tan();
        let aspect_ratio = target_width as f64 / target_height as f64;

        Self {
            target_width,
            target_height,
            field_of_view,
            origin,

            screen_dim,
            aspect_ratio,
        }
    }

    /// Normalized ray through the center of pixel `(x, y)`, `(0, 0)` being the top left corner.
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let x_ndc = 2. * (x as f64 + 0.5) / self.target_width as f64 - 1.;
        let y_ndc = 2. * (y as f64 + 0.5) / self.target_height as f64 - 1.;

        let screen_x = x_ndc * self.screen_dim * self.aspect_ratio;
        let screen_y = -y_ndc * self.screen_dim;

        let direction = Vector::new(screen_x, screen_y, 1.).normalize();
        Ray::new(self.origin, direction)
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn target_height(&self) -> usize {
        self.target_height
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn origin(&self) -> Vector {
        self.origin
    }
}
