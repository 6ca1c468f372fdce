/* Copyright 2020 @TwoCookingMice */

use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const DISPLAY_GAMMA: Float = 0.6;

#[derive(Debug)]
pub enum PpmWriteError {
    Io(std::io::Error),
}

impl From<std::io::Error> for PpmWriteError {
    fn from(err: std::io::Error) -> Self {
        PpmWriteError::Io(err)
    }
}

impl fmt::Display for PpmWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PpmWriteError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for PpmWriteError {}

pub fn encode_channel(value: Float) -> u8 {
    (255.0 * value.clamp(0.0, 1.0).powf(DISPLAY_GAMMA)) as u8
}

// Text header, then 3 bytes per pixel in row-major order, top row first.
pub fn write_ppm<W: Write>(writer: &mut W, image: &Bitmap) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    for y in 0..image.height() {
        for x in 0..image.width() {
            let pixel = image[(x, y)];
            let rgb = [
                encode_channel(pixel[0]),
                encode_channel(pixel[1]),
                encode_channel(pixel[2]),
            ];
            writer.write_all(&rgb)?;
        }
    }
    Ok(())
}

pub fn write_ppm_to_file<P: AsRef<Path>>(image: &Bitmap, file_path: P) -> Result<(), PpmWriteError> {
    log::info!("Writing binary PPM image to: {}.", file_path.as_ref().display());

    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}
