use crate::math::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    /// Lights every point evenly, regardless of its orientation
    Ambient { intensity: f64 },
    Point { intensity: f64, position: Vector },
    /// `direction` points from the surface towards the light and is used as given
    Directional { intensity: f64, direction: Vector },
}

impl Light {
    pub fn ambient(intensity: f64) -> Self {
        Self::Ambient { intensity }
    }

    pub fn point(intensity: f64, position: Vector) -> Self {
        Self::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: f64, direction: Vector) -> Self {
        Self::Directional {
            intensity,
            direction,
        }
    }

    pub fn intensity(&self) -> f64 {
        match *self {
            Self::Ambient { intensity }
            | Self::Point { intensity, .. }
            | Self::Directional { intensity, .. } => intensity,
        }
    }

    /// Light intensity contributed at `point` using Phong-like diffuse and specular terms.
    ///
    /// The diffuse term is not clamped, a surface facing away from the light
    /// receives a negative contribution.
    /// `specular` is the material exponent, `None` skips the specular term.
    pub fn intensity_at(
        &self,
        point: Vector,
        normal_v: Vector,
        view_v: Vector,
        specular: Option<f64>,
    ) -> f64 {
        let (intensity, light_v) = match *self {
            Self::Ambient { intensity } => return intensity,
            Self::Point {
                intensity,
                position,
            } => (intensity, position - point),
            Self::Directional {
                intensity,
                direction,
            } => (intensity, direction),
        };

        let normal_dot_light = normal_v.dot(light_v);
        let diffuse =
            intensity * normal_dot_light / (normal_v.magnitude() * light_v.magnitude());

        let Some(exponent) = specular else {
            return diffuse;
        };

        let reflect_v = normal_v * 2. * normal_dot_light - light_v;
        let reflect_dot_view = reflect_v.dot(view_v);

        // reflection pointing away from the viewer gives no highlight
        if reflect_dot_view > 0. {
            let cos = reflect_dot_view / (reflect_v.magnitude() * view_v.magnitude());
            diffuse + intensity * cos.powf(exponent)
        } else {
            diffuse
        }
    }
}

/// Total intensity from all `lights` at `point`, left unclamped.
pub fn intensity_at(
    lights: &[Light],
    point: Vector,
    normal_v: Vector,
    view_v: Vector,
    specular: Option<f64>,
) -> f64 {
    lights
        .iter()
        .map(|light| light.intensity_at(point, normal_v, view_v, specular))
        .sum()
}
