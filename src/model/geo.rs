use serde::{Deserialize, Serialize};

/// Marker position plus the address the map resolved for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// Event emitted by the map widget when the user moves the marker.
///
/// Coordinates and address always travel together so a fresh position can
/// never be paired with a stale address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEvent {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    pub address: String,
}

impl MapEvent {
    pub fn new(latitude: f64, longitude: f64, address: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            address: address.into(),
        }
    }
}

impl From<MapEvent> for GeoPoint {
    fn from(event: MapEvent) -> Self {
        Self {
            latitude: event.latitude,
            longitude: event.longitude,
            address: event.address,
        }
    }
}
