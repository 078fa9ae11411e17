use crate::{
    math::color::Color,
    render::ray::{Ray, intersection::IntersectionCollector},
    scene::{Scene, light},
};

#[derive(PartialEq, Debug, Clone, Default)]
/// The integrator calculates the color for each given ray
pub struct Integrator {
    /// The scene to be rendered
    scene: Scene,
}

impl Integrator {
    pub fn new(scene: Scene) -> Self {
        Self { scene }
    }

    /// Color seen along `ray`, or `None` when no sphere is hit
    /// strictly between `min_t` and `max_t`.
    ///
    /// Channels of the returned color are always within `[0, 255]`.
    pub fn trace(&self, ray: &Ray, min_t: f64, max_t: f64) -> Option<Color> {
        let mut collector = IntersectionCollector::new(min_t, max_t);
        for sphere in self.scene.spheres() {
            if let Some((t0, t1)) = sphere.intersect(ray) {
                collector.add(t0, sphere);
                collector.add(t1, sphere);
            }
        }

        let hit = collector.hit()?;
        let sphere = hit.sphere();
        let material = sphere.material();

        let point = ray.position(hit.time());
        let normal_v = sphere.normal_at(point);
        let view_v = -*ray.direction();

        let intensity =
            light::intensity_at(self.scene.lights(), point, normal_v, view_v, material.specular);

        Some((material.diffuse * intensity).clamped())
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
