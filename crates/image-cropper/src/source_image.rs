use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crop_geometry::PixelSize;
use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};
use thiserror::Error;
use tracing::debug;

/// The decoded image a crop session works on.
pub struct SourceImage {
    pub path: PathBuf,
    pub image: DynamicImage,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read image file:\n{0}")]
    Read(#[from] io::Error),

    #[error("Image file is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("File is not a recognised image")]
    NotAnImage(#[source] ImageError),

    #[error("Failed to decode {format:?} image:\n{source}")]
    Decode {
        format: ImageFormat,
        #[source]
        source: ImageError,
    },
}

impl SourceImage {
    /// Reads and decodes the image at `path`, rejecting files over `max_file_size` bytes and
    /// files that are not images.
    pub fn open(path: &Path, max_file_size: u64) -> Result<Self, Error> {
        let size = fs::metadata(path)?.len();
        if size > max_file_size {
            return Err(Error::TooLarge {
                size,
                limit: max_file_size,
            });
        }

        let bytes = fs::read(path)?;
        let image = decode(&bytes)?;

        debug!(
            "Opened {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    pub fn natural_size(&self) -> PixelSize {
        let (width, height) = self.image.dimensions();
        PixelSize::new(width, height)
    }
}

fn decode(bytes: &[u8]) -> Result<DynamicImage, Error> {
    let format = image::guess_format(bytes).map_err(Error::NotAnImage)?;

    image::load_from_memory_with_format(bytes, format)
        .map_err(|source| Error::Decode { format, source })
}
