// Copyright @yucwang 2026

use crate::io::ppm_utils::encode_channel;
use crate::math::bitmap::Bitmap;

use image::{save_buffer, ColorType};

// Write PNG Image to file, quantized with the same display gamma as
// the PPM encoder.
pub fn write_png_to_file(bitmap: &Bitmap, file_path: &str) -> Result<(), image::ImageError> {
    log::info!("Writing PNG image to: {}.", file_path);

    let mut bytes = Vec::with_capacity(bitmap.width() * bitmap.height() * 3);
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let pixel = bitmap[(x, y)];
            bytes.push(encode_channel(pixel[0]));
            bytes.push(encode_channel(pixel[1]));
            bytes.push(encode_channel(pixel[2]));
        }
    }
    save_buffer(file_path, &bytes,
                bitmap.width() as u32, bitmap.height() as u32,
                ColorType::Rgb8)
}
