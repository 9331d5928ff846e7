use std::path::{Path, PathBuf};
use thiserror::Error;

/// Ontology file queried by the "Query Ontology" button
pub const DEFAULT_ONTOLOGY_PATH: &str = r"C:\Users\user\Documents\oo\owl.owl";

/// Width and height of a top-level window in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Application settings; fixed at build time, no external sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub ontology_path: PathBuf,
    pub main_title: String,
    pub main_window: WindowSize,
    pub calculator_title: String,
    pub calculator_window: WindowSize,
}

impl AppConfig {
    pub const MIN_WIDTH: i32 = 200;
    pub const MIN_HEIGHT: i32 = 150;

    pub fn with_ontology_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ontology_path: path.into(),
            ..Self::default()
        }
    }

    pub fn ontology_path(&self) -> &Path {
        &self.ontology_path
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ontology_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOntologyPath);
        }

        for (window, size) in [
            ("main", self.main_window),
            ("calculator", self.calculator_window),
        ] {
            if size.width < Self::MIN_WIDTH || size.height < Self::MIN_HEIGHT {
                return Err(ConfigError::WindowTooSmall {
                    window,
                    width: size.width,
                    height: size.height,
                });
            }
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ontology_path: PathBuf::from(DEFAULT_ONTOLOGY_PATH),
            main_title: "Intelligent Tutoring System - Math".to_string(),
            main_window: WindowSize::new(600, 400),
            calculator_title: "Area Calculation".to_string(),
            calculator_window: WindowSize::new(400, 400),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Ontology path must not be empty")]
    EmptyOntologyPath,
    #[error(
        "The {window} window needs at least {}x{} pixels, got {width}x{height}",
        AppConfig::MIN_WIDTH,
        AppConfig::MIN_HEIGHT
    )]
    WindowTooSmall {
        window: &'static str,
        width: i32,
        height: i32,
    },
}
