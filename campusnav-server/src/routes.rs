use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use campusnav::{BuildingArea, BuildingDirectory, CampusRouter, Coord, building_areas};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    #[serde(default)]
    from: String,
    #[serde(default)]
    to: String,
}

impl RouteQuery {
    fn ids(&self) -> Result<(&str, &str), AppError> {
        let (from, to) = (self.from.trim(), self.to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(AppError::MissingBuildingId);
        }
        Ok((from, to))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,
    /// Empty when either building is unknown
    pub waypoints: Vec<Coord<f64>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub segments: usize,
    pub junctions: usize,
    pub walkways: usize,
    pub skipped_tokens: usize,
}

pub async fn route_handler<D: BuildingDirectory + 'static>(
    State(router): State<Arc<CampusRouter<D>>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let (from, to) = query.ids()?;
    let waypoints = router.find_route(from, to).await;
    debug!(from, to, waypoints = waypoints.len(), "route served");

    Ok(Json(RouteResponse {
        from: from.to_string(),
        to: to.to_string(),
        waypoints,
    }))
}

pub async fn route_geojson_handler<D: BuildingDirectory + 'static>(
    State(router): State<Arc<CampusRouter<D>>>,
    Query(query): Query<RouteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (from, to) = query.ids()?;
    let route = router
        .find_detailed_route(from, to)
        .await
        .ok_or_else(|| AppError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })?;

    let body = route.to_geojson_string()?;
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, "application/geo+json")],
        body,
    ))
}

pub async fn areas_handler() -> Json<&'static [BuildingArea]> {
    Json(building_areas())
}

pub async fn network_handler<D: BuildingDirectory + 'static>(
    State(router): State<Arc<CampusRouter<D>>>,
) -> Json<NetworkInfo> {
    let network = router.network();
    Json(NetworkInfo {
        segments: network.segment_count(),
        junctions: network.junction_count(),
        walkways: network.walkway_count(),
        skipped_tokens: network.skipped_tokens(),
    })
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
