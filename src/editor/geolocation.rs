use crate::model::{GeoPoint, MapEvent};
use tracing::debug;

/// Current marker position of the listing.
///
/// The only mutator is [`GeolocationState::set_from_map_event`]; there are no
/// per-field setters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeolocationState {
    point: GeoPoint,
}

impl GeolocationState {
    pub fn set_from_map_event(&mut self, event: MapEvent) {
        debug!(latitude = event.latitude, longitude = event.longitude, address = %event.address, "Marker moved");
        self.point = event.into();
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }

    pub fn latitude(&self) -> f64 {
        self.point.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.point.longitude
    }

    pub fn address(&self) -> &str {
        &self.point.address
    }

    pub(crate) fn reset(&mut self) {
        self.point = GeoPoint::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_event_replaces_all_fields_together() {
        let mut geo = GeolocationState::default();
        geo.set_from_map_event(MapEvent::new(37.56, 126.97, "Seoul Jung-gu"));
        geo.set_from_map_event(MapEvent::new(35.17, 129.07, "Busan"));

        assert_eq!(
            geo.point(),
            &GeoPoint {
                latitude: 35.17,
                longitude: 129.07,
                address: "Busan".into()
            }
        );
    }

    #[test]
    fn starts_at_origin_with_empty_address() {
        let geo = GeolocationState::default();
        assert_eq!(geo.latitude(), 0.0);
        assert_eq!(geo.longitude(), 0.0);
        assert!(geo.address().is_empty());
    }
}
