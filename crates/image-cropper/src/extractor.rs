use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::Utc;
use crop_geometry::PixelRect;
use image::{DynamicImage, GenericImageView, ImageError, codecs::jpeg::JpegEncoder};
use thiserror::Error;
use tracing::instrument;

/// Crops `image` to `pixel_rect` and encodes the result as a JPEG.
#[instrument("extractor::extract", skip(image), err)]
pub fn extract(
    image: &DynamicImage,
    pixel_rect: PixelRect,
    quality: u8,
) -> Result<Vec<u8>, Error> {
    let (width, height) = image.dimensions();
    if pixel_rect.width == 0
        || pixel_rect.height == 0
        || pixel_rect.right() > width
        || pixel_rect.bottom() > height
    {
        return Err(Error::OutsideImage(pixel_rect, width, height));
    }

    let cropped = image
        .crop_imm(
            pixel_rect.x,
            pixel_rect.y,
            pixel_rect.width,
            pixel_rect.height,
        )
        .to_rgb8();

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(&cropped)?;

    Ok(bytes)
}

/// Writes an encoded crop to `cropped-image-<unix millis>.jpg` in `directory`.
#[instrument("extractor::save", skip(bytes), err)]
pub fn save(bytes: &[u8], directory: &Path) -> Result<PathBuf, Error> {
    let name = format!("cropped-image-{}.jpg", Utc::now().timestamp_millis());
    let path = directory.join(name);

    let file = File::create(&path).map_err(Error::CreateFile)?;
    let mut buffer = BufWriter::new(file);
    buffer.write_all(bytes).map_err(Error::WriteFile)?;
    buffer.flush().map_err(Error::WriteFile)?;

    Ok(path)
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Crop {0:?} is outside the {1}x{2} image")]
    OutsideImage(PixelRect, u32, u32),

    #[error("Failed to encode crop:\n{0}")]
    Encode(#[from] ImageError),

    #[error("Failed to create file for crop:\n{0}")]
    CreateFile(#[source] io::Error),

    #[error("Failed to write crop to file:\n{0}")]
    WriteFile(#[source] io::Error),
}
