// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

// Looks down +z with a mirrored x, keeping the image left-to-right.
pub struct PinholeCamera {
    origin: Vector3f,
    tan_half_fov_y: Float,
    aspect: Float,
}

impl PinholeCamera {
    pub fn new(origin: Vector3f,
               fov_y_degrees: Float,
               width: usize,
               height: usize) -> Self {
        Self {
            origin,
            tan_half_fov_y: (0.5 * fov_y_degrees.to_radians()).tan(),
            aspect: width as Float / height as Float,
        }
    }
}

impl Sensor for PinholeCamera {
    fn sample_ray(&self, u: &Vector2f) -> Ray3f {
        let px = (2.0 * u.x - 1.0) * self.aspect * self.tan_half_fov_y;
        let py = (1.0 - 2.0 * u.y) * self.tan_half_fov_y;

        let dir = Vector3f::new(-px, py, 1.0).normalize();
        Ray3f::new(self.origin, dir, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinhole_camera_center_ray() {
        let origin = Vector3f::new(278.0, 273.0, -800.0);
        let cam = PinholeCamera::new(origin, 90.0, 4, 4);

        let ray = cam.sample_ray(&Vector2f::new(0.5, 0.5));
        let dir = ray.dir();

        assert_eq!(ray.origin(), origin);
        assert!((dir.x - 0.0).abs() < 1e-6);
        assert!((dir.y - 0.0).abs() < 1e-6);
        assert!((dir.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pinhole_camera_screen_directions() {
        let origin = Vector3f::new(0.0, 0.0, 0.0);
        let cam = PinholeCamera::new(origin, 60.0, 8, 8);

        // Right half of the screen maps to negative world x.
        let right = cam.sample_ray(&Vector2f::new(0.9, 0.5));
        assert!(right.dir().x < 0.0);
        assert!((right.dir().y - 0.0).abs() < 1e-6);

        // Top half of the screen maps to positive world y.
        let top = cam.sample_ray(&Vector2f::new(0.5, 0.1));
        assert!(top.dir().y > 0.0);
        assert!((top.dir().x - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_pinhole_camera_aspect_widens_x() {
        let origin = Vector3f::new(0.0, 0.0, 0.0);
        let square = PinholeCamera::new(origin, 45.0, 8, 8);
        let wide = PinholeCamera::new(origin, 45.0, 16, 8);

        let corner = Vector2f::new(1.0, 0.5);
        let square_x = square.sample_ray(&corner).dir().x.abs();
        let wide_x = wide.sample_ray(&corner).dir().x.abs();
        assert!(wide_x > square_x);
    }
}
