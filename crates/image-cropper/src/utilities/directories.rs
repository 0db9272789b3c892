use std::{fs::create_dir_all, path::PathBuf};

use super::failure::{Failure, Ignore};

/// Path to the directory cropped images are saved to.
pub fn output_dir() -> PathBuf {
    let dir = dirs::picture_dir()
        .or_else(dirs::home_dir)
        .report_and_panic("The picture directory could not be retrieved")
        .join("Cropped");

    create_dir_all(&dir)
        .report("Could not create the output directory")
        .ignore();

    dir
}

/// Path to the config directory.
pub fn config_dir() -> PathBuf {
    let dir = dirs::config_dir()
        .report_and_panic("The config directory could not be retrieved")
        .join("Image Cropper");

    create_dir_all(&dir)
        .report("Could not create the config directory")
        .ignore();

    dir
}
