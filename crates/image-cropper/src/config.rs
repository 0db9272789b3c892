use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crop_geometry::{SessionConfig, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utilities::directories::config_dir;

const FILE_NAME: &str = "image-cropper.toml";

/// 10 MiB, the largest image accepted by default.
const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Crop session parameters.
    pub session: SessionConfig,

    /// Size of the area the image is displayed in.
    pub container: Size,

    /// Distance from a corner within which a press grabs the corner handle.
    pub handle_radius: f32,

    /// JPEG quality of the cropped image, 1 to 100.
    pub jpeg_quality: u8,

    /// Largest image file accepted, in bytes.
    pub max_file_size: u64,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open config file:\n{0}")]
    OpenFile(#[source] io::Error),

    #[error("Failed to save config file:\n{0}")]
    SaveFile(#[from] SaveError),

    #[error("Failed to read config file:\n{0}")]
    ReadFile(#[source] io::Error),

    #[error("Failed to deserialize config:\n{0}")]
    Deserialize(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to serialize config:\n{0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write file:\n{0}")]
    Write(#[from] io::Error),
}

impl Config {
    /// Loads the config at `path`, writing the defaults there if it does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, LoadError> {
        let file = fs::File::open(path);

        if file
            .as_ref()
            .is_err_and(|e| e.kind() == io::ErrorKind::NotFound)
        {
            let config = Self::default();
            config.save(path)?;

            return Ok(config);
        }

        let mut file = file.map_err(LoadError::OpenFile)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(LoadError::ReadFile)?;

        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let toml_string = toml::to_string_pretty(self)?;

        fs::write(path, toml_string.as_bytes())?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        config_dir().join(FILE_NAME)
    }

    /// JPEG quality limited to the range the encoder accepts.
    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            container: Size::new(400.0, 300.0),
            handle_radius: 20.0,
            jpeg_quality: 95,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str(
            r#"
            jpeg_quality = 80

            [session]
            force_square = false
            "#,
        )
        .unwrap();

        assert_eq!(config.jpeg_quality, 80);
        assert!(!config.session.force_square);
        assert_eq!(config.session.min_size, 10.0);
        assert_eq!(config.container, Size::new(400.0, 300.0));
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
    }

    #[test]
    fn load_or_create_writes_defaults() {
        let path = std::env::temp_dir().join(format!(
            "image-cropper-config-test-{}.toml",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let created = Config::load_or_create(&path).unwrap();
        assert_eq!(created, Config::default());
        assert!(path.exists());

        let loaded = Config::load_or_create(&path).unwrap();
        assert_eq!(loaded, created);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn quality_is_clamped() {
        let config = Config {
            jpeg_quality: 0,
            ..Config::default()
        };

        assert_eq!(config.jpeg_quality(), 1);
    }
}
