// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;

pub struct SkyIntegrator {
    horizon: Vector3f,
    zenith: Vector3f,
}

impl SkyIntegrator {
    pub fn new(horizon: Vector3f, zenith: Vector3f) -> Self {
        Self { horizon, zenith }
    }
}

impl Default for SkyIntegrator {
    fn default() -> Self {
        Self::new(Vector3f::new(1.0, 1.0, 1.0),
                  Vector3f::new(0.5, 0.7, 1.0))
    }
}

impl Integrator for SkyIntegrator {
    fn cast_ray(&self, ray: &Ray3f, _depth: u32) -> Vector3f {
        let t = 0.5 * (ray.dir().y + 1.0);
        self.horizon * (1.0 - t) + self.zenith * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoot(integrator: &SkyIntegrator, dir: Vector3f) -> Vector3f {
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, 0.0), dir, None, None);
        integrator.cast_ray(&ray, 0)
    }

    #[test]
    fn test_sky_endpoints() {
        let integrator = SkyIntegrator::default();
        let up = shoot(&integrator, Vector3f::new(0.0, 1.0, 0.0));
        let down = shoot(&integrator, Vector3f::new(0.0, -1.0, 0.0));
        assert!((up - Vector3f::new(0.5, 0.7, 1.0)).norm() < 1e-6);
        assert!((down - Vector3f::new(1.0, 1.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_sky_level_ray_blends_evenly() {
        let integrator = SkyIntegrator::new(Vector3f::new(1.0, 0.0, 0.0),
                                            Vector3f::new(0.0, 0.0, 1.0));
        let level = shoot(&integrator, Vector3f::new(0.0, 0.0, 1.0));
        assert!((level - Vector3f::new(0.5, 0.0, 0.5)).norm() < 1e-6);
    }
}
