use crate::{math::vector::Vector, render::ray::Ray};

use super::material::Material;

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vector,
    radius: f64,
    material: Material,
}

impl Sphere {
    pub fn new(center: Vector, radius: f64, material: Material) -> Self {
        debug_assert!(radius > 0., "sphere radius must be positive, got {radius}");
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vector {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Outward surface normal, `point` is expected to lie on the surface.
    pub fn normal_at(&self, point: Vector) -> Vector {
        (point - self.center).normalize()
    }

    /// Geometric ray-sphere test.
    /// Returns both intersection times `(t0, t1)` with `t0 <= t1`,
    /// it's up to the caller to pick the ones inside its clipping range.
    ///
    /// A sphere whose center projects behind the ray origin is never hit,
    /// even when the origin lies inside of it.
    pub fn intersect(&self, ray: &Ray) -> Option<(f64, f64)> {
        let to_center = self.center - *ray.origin();
        let tca = to_center.dot(*ray.direction());
        if tca < 0. {
            return None;
        }

        // distance between the center and the ray
        let d = (to_center.dot(to_center) - tca * tca).sqrt();
        if d > self.radius {
            return None;
        }

        let thc = (self.radius * self.radius - d * d).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        if t0 < 0. && t1 < 0. {
            return None;
        }
        Some((t0, t1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, math::Color};

    fn unit_sphere_at(center: Vector) -> Sphere {
        Sphere::new(center, 1., Material::matte(Color::white()))
    }

    #[test]
    fn ray_through_center() {
        let sphere = unit_sphere_at(Vector::new(0., 0., 5.));
        let ray = Ray::new(Vector::zero(), Vector::new(0., 0., 1.));

        let (t0, t1) = sphere.intersect(&ray).unwrap();
        assert_approx_eq_low_prec!(t0, 4.);
        assert_approx_eq_low_prec!(t1, 6.);
    }

    #[test]
    fn chord_shrinks_towards_tangent() {
        let sphere = Sphere::new(Vector::new(0., 0., 5.), 2., Material::default());
        let direction = Vector::new(0., 0., 1.);

        let mut last_chord = f64::INFINITY;
        for offset in [0., 0.5, 1., 1.5, 1.9, 1.99] {
            let ray = Ray::new(Vector::new(offset, 0., 0.), direction);
            let (t0, t1) = sphere.intersect(&ray).unwrap();

            assert!(t0 <= t1);
            let tca = 5.;
            let thc = (4. - offset * offset).sqrt();
            assert_approx_eq_low_prec!(t0, tca - thc);
            assert_approx_eq_low_prec!(t1, tca + thc);

            assert!(t1 - t0 < last_chord);
            last_chord = t1 - t0;
        }
    }

    #[test]
    fn tangent_ray_is_a_hit() {
        let sphere = unit_sphere_at(Vector::new(0., 0., 5.));
        let ray = Ray::new(Vector::new(1., 0., 0.), Vector::new(0., 0., 1.));

        let (t0, t1) = sphere.intersect(&ray).unwrap();
        assert_eq!(t0, t1);
        assert_approx_eq_low_prec!(t0, 5.);
    }

    #[test]
    fn ray_passing_beside_misses() {
        let sphere = unit_sphere_at(Vector::new(0., 0., 5.));
        let ray = Ray::new(Vector::new(1.5, 0., 0.), Vector::new(0., 0., 1.));

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let sphere = unit_sphere_at(Vector::new(0., 0., -5.));
        let ray = Ray::new(Vector::zero(), Vector::new(0., 0., 1.));

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn origin_inside_sphere() {
        let sphere = unit_sphere_at(Vector::new(0., 0., 0.5));
        let ray = Ray::new(Vector::zero(), Vector::new(0., 0., 1.));

        let (t0, t1) = sphere.intersect(&ray).unwrap();
        assert_approx_eq_low_prec!(t0, -0.5);
        assert_approx_eq_low_prec!(t1, 1.5);
    }

    #[test]
    fn origin_inside_sphere_with_center_behind_is_ignored() {
        let sphere = unit_sphere_at(Vector::new(0., 0., -0.5));
        let ray = Ray::new(Vector::zero(), Vector::new(0., 0., 1.));

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn near_tangent_rays_stay_finite() {
        let sphere = unit_sphere_at(Vector::new(0., 0., 5.));
        let direction = Vector::new(0., 0., 1.);

        for offset in [1. - 1e-12, 1., 1. + 1e-12, 0.1 + 0.2 + 0.7] {
            let ray = Ray::new(Vector::new(offset, 0., 0.), direction);
            if let Some((t0, t1)) = sphere.intersect(&ray) {
                assert!(t0.is_finite() && t1.is_finite());
                assert!(t0 <= t1);
            }
        }
    }

    #[test]
    fn normal_points_outwards() {
        let sphere = Sphere::new(Vector::new(0., 1., 0.), 2., Material::default());

        assert_approx_eq_low_prec!(
            sphere.normal_at(Vector::new(0., 3., 0.)),
            Vector::new(0., 1., 0.)
        );
        assert_approx_eq_low_prec!(
            sphere.normal_at(Vector::new(-2., 1., 0.)),
            Vector::new(-1., 0., 0.)
        );
    }
}
