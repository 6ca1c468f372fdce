// Copyright @yucwang 2026

use crate::math::constants::Vector2f;
use crate::math::ray::Ray3f;

// u is the normalized film position, (0, 0) at the top left. The
// caller applies any pixel jitter.
pub trait Sensor: Sync {
    fn sample_ray(&self, u: &Vector2f) -> Ray3f;
}
