// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;

pub struct ConstantIntegrator {
    radiance: Vector3f,
}

impl ConstantIntegrator {
    pub fn new(radiance: Vector3f) -> Self {
        Self { radiance }
    }
}

impl Integrator for ConstantIntegrator {
    fn cast_ray(&self, _ray: &Ray3f, _depth: u32) -> Vector3f {
        self.radiance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_ignores_the_ray() {
        let radiance = Vector3f::new(0.25, 0.5, 0.75);
        let integrator = ConstantIntegrator::new(radiance);

        let a = Ray3f::new(Vector3f::new(0.0, 0.0, 0.0),
                           Vector3f::new(0.0, 0.0, 1.0), None, None);
        let b = Ray3f::new(Vector3f::new(5.0, -3.0, 2.0),
                           Vector3f::new(0.0, 1.0, 0.0), None, None);
        assert_eq!(integrator.cast_ray(&a, 0), radiance);
        assert_eq!(integrator.cast_ray(&b, 3), radiance);
    }
}
