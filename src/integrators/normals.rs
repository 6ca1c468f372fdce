// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::math::constants::{Float, Vector3f, EPSILON};
use crate::math::ray::Ray3f;

// Shades the normal of one analytic sphere; misses are black.
pub struct NormalsIntegrator {
    center: Vector3f,
    radius: Float,
}

impl NormalsIntegrator {
    pub fn new(center: Vector3f, radius: Float) -> Self {
        Self { center, radius }
    }
}

impl Default for NormalsIntegrator {
    fn default() -> Self {
        // In front of the default eye position.
        Self::new(Vector3f::new(278.0, 273.0, -300.0), 120.0)
    }
}

impl Integrator for NormalsIntegrator {
    fn cast_ray(&self, ray: &Ray3f, _depth: u32) -> Vector3f {
        let oc = ray.origin() - self.center;
        let b = oc.dot(&ray.dir());
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return Vector3f::new(0.0, 0.0, 0.0);
        }

        let sqrt_disc = discriminant.sqrt();
        let mut t = -b - sqrt_disc;
        if t < EPSILON || !ray.test_segment(t) {
            t = -b + sqrt_disc;
        }
        if t < EPSILON || !ray.test_segment(t) {
            return Vector3f::new(0.0, 0.0, 0.0);
        }

        let normal = (ray.at(t) - self.center) / self.radius;
        (normal + Vector3f::new(1.0, 1.0, 1.0)) * 0.5
    }
}
