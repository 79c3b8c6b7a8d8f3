//! Full-state text exports.
//!
//! Both files are overwritten in full on every write; they are snapshots of
//! the current store, not logs.
//!
//! ```text
//! Index Cityname          Nbr Road Budget
//! 1 Kigali                1. Kigali-Huye 5.00
//! 2 Huye
//! ```

use crate::error::Result;
use crate::network::RoadNetwork;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header line of the city export.
pub const CITIES_HEADER: &str = "Index Cityname";

/// Header line of the road export.
pub const ROADS_HEADER: &str = "Nbr Road Budget";

/// City export text: header, then `<id> <name>` per city.
pub struct CitiesSnapshot<'a>(pub &'a RoadNetwork);

impl fmt::Display for CitiesSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", CITIES_HEADER)?;
        for (i, name) in self.0.cities().iter().enumerate() {
            writeln!(f, "{} {}", i + 1, name)?;
        }
        Ok(())
    }
}

/// Road export text: header, then `<n>. <a>-<b> <budget>` per road, row-major.
pub struct RoadsSnapshot<'a>(pub &'a RoadNetwork);

impl fmt::Display for RoadsSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cities = self.0.cities();
        writeln!(f, "{}", ROADS_HEADER)?;
        for (n, (key, road)) in self.0.roads().enumerate() {
            writeln!(
                f,
                "{}. {}-{} {:.2}",
                n + 1,
                cities[key.low()],
                cities[key.high()],
                road.budget_amount()
            )?;
        }
        Ok(())
    }
}

/// City export text for `network`.
pub fn cities_snapshot(network: &RoadNetwork) -> String {
    CitiesSnapshot(network).to_string()
}

/// Road export text for `network`.
pub fn roads_snapshot(network: &RoadNetwork) -> String {
    RoadsSnapshot(network).to_string()
}

/// Writes the two export files.
#[derive(Debug, Clone)]
pub struct Exporter {
    cities_path: PathBuf,
    roads_path: PathBuf,
}

impl Exporter {
    /// Create an exporter for the given file paths.
    pub fn new(cities_path: impl Into<PathBuf>, roads_path: impl Into<PathBuf>) -> Self {
        Self {
            cities_path: cities_path.into(),
            roads_path: roads_path.into(),
        }
    }

    /// Path of the city export.
    pub fn cities_path(&self) -> &Path {
        &self.cities_path
    }

    /// Path of the road export.
    pub fn roads_path(&self) -> &Path {
        &self.roads_path
    }

    /// Rewrite the city export.
    pub fn write_cities(&self, network: &RoadNetwork) -> Result<()> {
        write_truncate(&self.cities_path, &cities_snapshot(network))?;
        tracing::info!("Wrote {} cities to {:?}", network.len(), self.cities_path);
        Ok(())
    }

    /// Rewrite the road export.
    pub fn write_roads(&self, network: &RoadNetwork) -> Result<()> {
        write_truncate(&self.roads_path, &roads_snapshot(network))?;
        tracing::info!("Wrote {} roads to {:?}", network.road_count(), self.roads_path);
        Ok(())
    }
}

fn write_truncate(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(())
}
