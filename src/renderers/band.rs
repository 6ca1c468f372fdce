// Copyright @yucwang 2021

use crate::core::config::{ConfigError, RenderConfig};
use crate::core::integrator::Integrator;
use crate::core::progress::{ConsoleProgress, ProgressDisplay, ProgressTracker};
use crate::core::sampler::{pixel_seed, LcgRng, Sampler};
use crate::core::sensor::Sensor;
use crate::math::bitmap::{Bitmap, RowBand, RowRange};
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::sensors::pinhole::PinholeCamera;
use std::thread;

pub use super::renderer::Renderer;

// One scoped worker thread per band; workers write into disjoint views
// of the same framebuffer and meet only at the progress tracker.
pub struct BandRenderer {
    config: RenderConfig,
    seed: u64,
    thread_count: Option<usize>,
    progress: Box<dyn ProgressDisplay>,
}

impl BandRenderer {
    pub fn new(config: RenderConfig, seed: u64) -> Self {
        let progress: Box<dyn ProgressDisplay> =
            Box::new(ConsoleProgress::new(config.height));
        Self {
            config: config,
            seed: seed,
            thread_count: None,
            progress: progress,
        }
    }

    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = Some(thread_count);
        self
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressDisplay>) -> Self {
        self.progress = progress;
        self
    }
}

impl Renderer for BandRenderer {
    fn render(&self, integrator: &dyn Integrator) -> Result<Bitmap, ConfigError> {
        self.config.validate()?;
        let width = self.config.width;
        let height = self.config.height;

        let camera = PinholeCamera::new(self.config.eye_position,
                                        self.config.fov, width, height);
        let sensor_ref: &dyn Sensor = &camera;
        let tracker = ProgressTracker::new(height, self.progress.as_ref());
        let thread_count = self.thread_count.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });
        let ranges = RowRange::partition(height, thread_count);
        log::info!("Rendering {}x{} at {} spp on {} threads.",
                   width, height, self.config.samples_per_pixel, thread_count);

        let mut bitmap = Bitmap::new(width, height);
        let bands = bitmap.split_rows_mut(&ranges);
        let config = &self.config;
        let tracker_ref = &tracker;
        let seed = self.seed;

        // All workers join before the scope returns; a worker panic
        // resurfaces here.
        thread::scope(|scope| {
            for band in bands {
                scope.spawn(move || {
                    render_band(band, sensor_ref, integrator, config,
                                seed, tracker_ref);
                });
            }
        });

        debug_assert_eq!(tracker.rows_done(), height);
        tracker.finish();
        Ok(bitmap)
    }
}

// An empty band reports nothing.
pub fn render_band(
    mut band: RowBand<'_>,
    sensor: &dyn Sensor,
    integrator: &dyn Integrator,
    config: &RenderConfig,
    base_seed: u64,
    tracker: &ProgressTracker<'_>,
) {
    for y in band.range().rows() {
        for x in 0..config.width {
            let mut rng = LcgRng::new(pixel_seed(base_seed, x, y));
            band[(x, y)] = sample_pixel(sensor, integrator, x, y,
                                        config.width, config.height,
                                        config.samples_per_pixel, &mut rng);
        }
        tracker.report_row_done();
    }
}

/// Averages `spp` jittered samples, two uniforms per sample with the x
/// offset drawn first. Samples are summed and divided once at the end.
pub fn sample_pixel(
    sensor: &dyn Sensor,
    integrator: &dyn Integrator,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    spp: u32,
    rng: &mut dyn Sampler,
) -> Vector3f {
    let spp = match spp {
        0 => 1,
        v => v,
    };
    let inv_spp = 1.0 / (spp as Float);

    let mut color = Vector3f::zeros();
    for _sample in 0..spp {
        let u = (x as Float + rng.next_f32()) / (width as Float);
        let v = (y as Float + rng.next_f32()) / (height as Float);
        let ray = sensor.sample_ray(&Vector2f::new(u, v));
        color += integrator.cast_ray(&ray, 0);
    }
    color * inv_spp
}
