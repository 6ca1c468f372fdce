// Copyright @yucwang 2021

use crate::core::config::ConfigError;
use crate::core::integrator::Integrator;
use crate::math::bitmap::Bitmap;

// Returns the linear framebuffer; encoding stays with the caller.
pub trait Renderer {
    fn render(&self, integrator: &dyn Integrator) -> Result<Bitmap, ConfigError>;
}
