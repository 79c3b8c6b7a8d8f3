//! Console configuration.

use roadplan_core::Exporter;
use std::path::{Path, PathBuf};

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for a console session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// City export file
    pub cities_file: PathBuf,

    /// Road and budget export file
    pub roads_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cities_file: PathBuf::from("cities.txt"),
            roads_file: PathBuf::from("roads.txt"),
        }
    }
}

impl AppConfig {
    /// Place both export files under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            cities_file: dir.join("cities.txt"),
            roads_file: dir.join("roads.txt"),
        }
    }

    /// Exporter writing to the configured files.
    pub fn exporter(&self) -> Exporter {
        Exporter::new(&self.cities_file, &self.roads_file)
    }
}
