pub mod light;
pub mod object;

use derive_builder::Builder;

use crate::math::{color::Color, vector::Vector};

use light::Light;
use object::{material::Material, sphere::Sphere};

/// Spheres and lights to render, both kept in insertion order.
/// Read-only once built.
#[derive(PartialEq, Debug, Clone, Default, Builder)]
#[builder(default)]
pub struct Scene {
    #[builder(setter(each(name = "sphere")))]
    spheres: Vec<Sphere>,
    #[builder(setter(each(name = "light")))]
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Three spheres resting on a huge ground sphere,
    /// lit by ambient, point and directional light.
    pub fn showcase() -> Self {
        let blue = Material::new(Color::new(69., 161., 255.), 500.);
        let white = Material::new(Color::new(240., 240., 240.), 180.);
        let red = Material::new(Color::new(255., 0., 57.), 10.);
        let ground = Material::new(Color::new(0., 57., 89.), 1000.);

        let spheres = vec![
            Sphere::new(Vector::new(-0.75, -0.2, 6.5), 1.5, red),
            Sphere::new(Vector::new(0., -1., 5.), 1., blue),
            Sphere::new(Vector::new(2., -0.5, 8.), 3., white),
            Sphere::new(Vector::new(0., -4001., 0.), 4000., ground),
        ];

        let lights = vec![
            Light::ambient(0.2),
            Light::point(0.6, Vector::new(-8., 1., 0.)),
            Light::directional(0.2, Vector::new(1., 4., -8.)),
        ];

        Self::new(spheres, lights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene() {
        let scene = Scene::empty();

        assert!(scene.spheres().is_empty());
        assert!(scene.lights().is_empty());
    }

    #[test]
    fn builder_keeps_insertion_order() {
        let first = Sphere::new(Vector::new(0., 0., 5.), 1., Material::default());
        let second = Sphere::new(Vector::new(0., 0., 9.), 2., Material::default());

        let scene = SceneBuilder::default()
            .sphere(first.clone())
            .sphere(second.clone())
            .light(Light::ambient(1.))
            .build()
            .unwrap();

        assert_eq!(scene.spheres(), &[first, second]);
        assert_eq!(scene.lights(), &[Light::ambient(1.)]);
    }

    #[test]
    fn showcase_scene() {
        let scene = Scene::showcase();

        assert_eq!(scene.spheres().len(), 4);
        assert_eq!(scene.lights().len(), 3);
        assert!(scene.spheres().iter().all(|sphere| sphere.radius() > 0.));
        assert!(scene.lights().iter().all(|light| light.intensity() >= 0.));
    }
}
