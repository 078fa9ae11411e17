use crate::math::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    /// Exponent of the specular highlight, `None` for matte surfaces.
    /// Higher values give smaller, sharper highlights.
    pub specular: Option<f64>,
}

impl Material {
    pub fn new(diffuse: Color, specular: f64) -> Self {
        Self {
            diffuse,
            specular: Some(specular),
        }
    }

    pub fn matte(diffuse: Color) -> Self {
        Self {
            diffuse,
            specular: None,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Color::white())
    }
}
