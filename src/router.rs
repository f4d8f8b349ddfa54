use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use campusnav_core::prelude::*;
use tokio::sync::OnceCell;

use crate::campus::CAMPUS_WALKWAYS;
use crate::directory::{Building, BuildingDirectory};

/// Building id -> center on the campus map
pub(crate) type BuildingCenters = HashMap<String, Coord<f64>>;

/// Campus routing entry point.
///
/// Owns the walkway network, built from path data on first use and immutable
/// afterwards, and the building coordinates, fetched from the directory on
/// first use. Share it behind an `Arc`; every query takes `&self`.
pub struct CampusRouter<D> {
    path_data: Cow<'static, str>,
    config: NetworkConfig,
    network: OnceLock<WalkwayNetwork>,
    directory: D,
    centers: OnceCell<BuildingCenters>,
}

impl<D: BuildingDirectory> CampusRouter<D> {
    /// Router over the bundled campus walkways
    pub fn new(directory: D) -> Self {
        Self {
            path_data: Cow::Borrowed(CAMPUS_WALKWAYS),
            config: NetworkConfig::default(),
            network: OnceLock::new(),
            directory,
            centers: OnceCell::new(),
        }
    }

    /// Router over custom walkway path data
    ///
    /// # Errors
    ///
    /// Returns an error if `config` holds invalid tolerances.
    pub fn with_path_data(
        path_data: impl Into<Cow<'static, str>>,
        config: NetworkConfig,
        directory: D,
    ) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            path_data: path_data.into(),
            config,
            network: OnceLock::new(),
            directory,
            centers: OnceCell::new(),
        })
    }

    /// The walkway network, built on first access.
    ///
    /// Building is deterministic, so concurrent first calls agree on the
    /// result and only one of them is kept.
    pub fn network(&self) -> &WalkwayNetwork {
        self.network
            .get_or_init(|| build_walkway_network(&self.path_data, &self.config))
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Building centers, loaded from the directory on first use.
    ///
    /// A failed load is logged and not cached, so the next call retries.
    pub(crate) async fn building_centers(&self) -> Option<&BuildingCenters> {
        let loaded = self
            .centers
            .get_or_try_init(|| async {
                let buildings = self.directory.buildings().await?;
                Ok::<_, Error>(index_centers(buildings))
            })
            .await;

        match loaded {
            Ok(centers) => Some(centers),
            Err(e) => {
                log::error!("Failed to load building directory: {e}");
                None
            }
        }
    }

    /// Center of a building, if the directory knows it
    pub async fn building_center(&self, id: &str) -> Option<Coord<f64>> {
        self.building_centers().await?.get(id).copied()
    }
}

fn index_centers(buildings: Vec<Building>) -> BuildingCenters {
    let mut centers = BuildingCenters::with_capacity(buildings.len());
    for building in buildings {
        if !(building.center.x.is_finite() && building.center.y.is_finite()) {
            log::warn!(
                "Building {} has a non-finite center {:?} - it will be unroutable",
                building.id,
                building.center
            );
            continue;
        }
        if centers.contains_key(&building.id) {
            log::warn!("Duplicate building id {} - keeping the first entry", building.id);
            continue;
        }
        centers.insert(building.id, building.center);
    }
    log::info!("Loaded {} building centers", centers.len());
    centers
}
