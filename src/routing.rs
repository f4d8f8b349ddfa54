use campusnav_core::prelude::*;

use crate::directory::BuildingDirectory;
use crate::router::CampusRouter;

impl<D: BuildingDirectory> CampusRouter<D> {
    /// Walking route between two buildings as drawable waypoints.
    ///
    /// Starts at `from_id`'s center and ends at `to_id`'s center. Empty when
    /// either id is unknown to the directory or the directory cannot be
    /// loaded.
    pub async fn find_route(&self, from_id: &str, to_id: &str) -> Vec<Coord<f64>> {
        self.find_detailed_route(from_id, to_id)
            .await
            .map(Route::into_waypoints)
            .unwrap_or_default()
    }

    /// Like [`find_route`](Self::find_route), keeping the route's length and
    /// whether a walkway path joined the two buildings.
    pub async fn find_detailed_route(&self, from_id: &str, to_id: &str) -> Option<Route> {
        let centers = self.building_centers().await?;

        let (Some(&from), Some(&to)) = (centers.get(from_id), centers.get(to_id)) else {
            log::debug!("No route: unknown building in ({from_id}, {to_id})");
            return None;
        };

        Some(assemble_route(self.network(), from, to))
    }
}
