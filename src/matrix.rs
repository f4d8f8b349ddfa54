use campusnav_core::prelude::*;
use rayon::prelude::*;

use crate::directory::BuildingDirectory;
use crate::router::CampusRouter;

impl<D: BuildingDirectory> CampusRouter<D> {
    /// Pairwise walking distances between buildings.
    ///
    /// Row `i`, column `j` holds the route length from `ids[i]` to `ids[j]`,
    /// or `None` when either building is unknown or no walkway path joins
    /// them.
    pub async fn route_length_matrix(&self, ids: &[&str]) -> Vec<Vec<Option<f64>>> {
        let Some(centers) = self.building_centers().await else {
            return vec![vec![None; ids.len()]; ids.len()];
        };
        let points: Vec<Option<Coord<f64>>> =
            ids.iter().map(|id| centers.get(*id).copied()).collect();
        let network = self.network();

        points
            .par_iter()
            .map(|from| {
                points
                    .iter()
                    .map(|to| {
                        let (Some(from), Some(to)) = (*from, *to) else {
                            return None;
                        };
                        let route = assemble_route(network, from, to);
                        route.connected.then_some(route.length)
                    })
                    .collect()
            })
            .collect()
    }
}
