// Copyright @yucwang 2026

use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;

// depth starts at 0 for primary rays.
pub trait Integrator: Sync {
    fn cast_ray(&self, ray: &Ray3f, depth: u32) -> Vector3f;
}
