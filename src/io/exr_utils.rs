/* Copyright 2020 @TwoCookingMice */

use crate::math::bitmap::Bitmap;

use exr::prelude::write_rgb_file;

// Write EXR Image to file
pub fn write_exr_to_file(image: &Bitmap, file_path: &str) -> Result<(), exr::error::Error> {
    log::info!("Writing OpenEXR image to: {}.", file_path);

    // Linear radiance, no display gamma.
    write_rgb_file(file_path, image.width(), image.height(), |x, y| {
        let pixel = image[(x, y)];
        (pixel[0], pixel[1], pixel[2])
    })
}
