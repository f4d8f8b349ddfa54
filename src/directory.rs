use std::future::Future;
use std::path::PathBuf;

use geo::Coord;
use serde::{Deserialize, Serialize};

use campusnav_core::Error;

/// Building record as published by the building directory.
///
/// Routing only reads `id` and `center`; other fields of the source
/// documents are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub center: Coord<f64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Building {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            center: Coord { x, y },
            name: None,
        }
    }
}

/// Source of building coordinates.
///
/// Loading may perform I/O; the router awaits it once and caches the result.
pub trait BuildingDirectory: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the buildings cannot be fetched or decoded.
    fn buildings(&self) -> impl Future<Output = Result<Vec<Building>, Error>> + Send;
}

/// Directory over an in-memory list of buildings
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    buildings: Vec<Building>,
}

impl StaticDirectory {
    pub fn new(buildings: Vec<Building>) -> Self {
        Self { buildings }
    }
}

impl BuildingDirectory for StaticDirectory {
    async fn buildings(&self) -> Result<Vec<Building>, Error> {
        Ok(self.buildings.clone())
    }
}

/// Directory backed by a JSON array of building documents on disk
#[derive(Debug, Clone)]
pub struct JsonFileDirectory {
    path: PathBuf,
}

impl JsonFileDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BuildingDirectory for JsonFileDirectory {
    async fn buildings(&self) -> Result<Vec<Building>, Error> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read buildings file '{}': {}",
                    self.path.display(),
                    e
                ),
            )
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            Error::InvalidData(format!(
                "Malformed buildings file '{}': {e}",
                self.path.display()
            ))
        })
    }
}
