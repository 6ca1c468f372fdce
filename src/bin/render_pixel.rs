use ganache::core::config::RenderConfig;
use ganache::core::integrator::Integrator;
use ganache::core::sampler::{pixel_seed, LcgRng};
use ganache::integrators::constant::ConstantIntegrator;
use ganache::integrators::normals::NormalsIntegrator;
use ganache::integrators::sky::SkyIntegrator;
use ganache::math::constants::{Float, Vector3f};
use ganache::renderers::band::sample_pixel;
use ganache::sensors::pinhole::PinholeCamera;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <x> <y> [--width N] [--height N] [--fov F] [--spp N] [--seed N] [--integrator sky|normals|constant]", args[0]);
        std::process::exit(1);
    }

    let x: usize = args[1].parse().unwrap_or(0);
    let y: usize = args[2].parse().unwrap_or(0);

    let mut config = RenderConfig::default();
    let mut seed: u64 = 0;
    let mut integrator_name = String::from("sky");

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    config.width = v;
                }
            }
            "--height" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    config.height = v;
                }
            }
            "--fov" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| v.parse::<Float>().ok()) {
                    config.fov = v;
                }
            }
            "--spp" => {
                i += 1;
                config.samples_per_pixel = args.get(i)
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(config.samples_per_pixel);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(seed);
            }
            "--integrator" => {
                i += 1;
                if let Some(v) = args.get(i) {
                    integrator_name = v.clone();
                }
            }
            _ => {}
        }
        i += 1;
    }

    if x >= config.width || y >= config.height {
        eprintln!("Pixel out of bounds: ({}, {}) for size {}x{}",
                  x, y, config.width, config.height);
        std::process::exit(2);
    }

    let integrator: Box<dyn Integrator> = match integrator_name.as_str() {
        "constant" => Box::new(ConstantIntegrator::new(Vector3f::new(1.0, 1.0, 1.0))),
        "normals" => Box::new(NormalsIntegrator::default()),
        "sky" => Box::new(SkyIntegrator::default()),
        other => {
            eprintln!("Unsupported integrator '{}', falling back to sky.", other);
            Box::new(SkyIntegrator::default())
        }
    };

    let camera = PinholeCamera::new(config.eye_position, config.fov,
                                    config.width, config.height);
    let mut rng = LcgRng::new(pixel_seed(seed, x, y));
    let avg = sample_pixel(&camera, integrator.as_ref(), x, y,
                           config.width, config.height,
                           config.samples_per_pixel, &mut rng);

    println!(
        "pixel ({}, {}) spp={} -> R {:.6}, G {:.6}, B {:.6}",
        x, y, config.samples_per_pixel, avg.x, avg.y, avg.z
    );
}
