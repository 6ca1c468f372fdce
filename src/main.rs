// Copyright 2020 TwoCookingMice

use ganache::core::config::RenderConfig;
use ganache::core::integrator::Integrator;
use ganache::integrators::constant::ConstantIntegrator;
use ganache::integrators::normals::NormalsIntegrator;
use ganache::integrators::sky::SkyIntegrator;
use ganache::io::{exr_utils, png_utils, ppm_utils};
use ganache::math::constants::{Float, Vector3f};
use ganache::renderers::band::{BandRenderer, Renderer};

use std::env;
use std::path::Path;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <output.ppm|output.png|output.exr> [--width N] [--height N] [--fov F] [--spp N] [--seed N] [--threads N] [--integrator sky|normals|constant] [--radiance R,G,B]", args[0]);
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut config = RenderConfig::default();
    let mut seed: u64 = 0;
    let mut thread_count: Option<usize> = None;
    let mut integrator_name = String::from("sky");
    let mut radiance = Vector3f::new(1.0, 1.0, 1.0);

    let mut i = 2;
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
                if let Some(v) = args.get(i).and_then(|v| v.parse::<u32>().ok()) {
                    config.samples_per_pixel = v;
                }
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            "--threads" => {
                i += 1;
                thread_count = args.get(i).and_then(|v| v.parse::<usize>().ok());
            }
            "--integrator" => {
                i += 1;
                if let Some(v) = args.get(i) {
                    integrator_name = v.clone();
                }
            }
            "--radiance" => {
                i += 1;
                if let Some(v) = args.get(i).and_then(|v| parse_rgb(v)) {
                    radiance = v;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let integrator: Box<dyn Integrator> = match integrator_name.as_str() {
        "constant" => Box::new(ConstantIntegrator::new(radiance)),
        "normals" => Box::new(NormalsIntegrator::default()),
        "sky" => Box::new(SkyIntegrator::default()),
        other => {
            eprintln!("Unknown integrator '{}', falling back to sky.", other);
            Box::new(SkyIntegrator::default())
        }
    };

    let mut renderer = BandRenderer::new(config, seed);
    if let Some(n) = thread_count {
        renderer = renderer.with_thread_count(n);
    }

    let image = match renderer.render(integrator.as_ref()) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("Invalid render configuration: {}", err);
            std::process::exit(1);
        }
    };

    let write_result = match Path::new(output_path).extension().and_then(|e| e.to_str()) {
        Some("exr") => exr_utils::write_exr_to_file(&image, output_path)
            .map_err(|e| e.to_string()),
        Some("png") => png_utils::write_png_to_file(&image, output_path)
            .map_err(|e| e.to_string()),
        _ => ppm_utils::write_ppm_to_file(&image, output_path)
            .map_err(|e| e.to_string()),
    };
    if let Err(err) = write_result {
        eprintln!("Failed to write {}: {}", output_path, err);
        std::process::exit(2);
    }
}

fn parse_rgb(input: &str) -> Option<Vector3f> {
    let mut channels = input.split(',').map(|c| c.trim().parse::<Float>().ok());
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    if channels.next().is_some() {
        return None;
    }
    Some(Vector3f::new(r, g, b))
}
