use geo::LineString;
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::Route;
use crate::Error;

impl Route {
    /// Converts the route to a `GeoJSON` `LineString` feature.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature cannot be assembled from its JSON form.
    pub fn to_geojson(&self) -> Result<Feature, Error> {
        let line = LineString::new(self.waypoints.clone());
        let geometry = Geometry::new(GeoJsonValue::from(&line));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "length": self.length,
                "connected": self.connected,
                "waypoint_count": self.waypoints.len(),
            }
        });

        serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
