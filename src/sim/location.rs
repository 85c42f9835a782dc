//! Random location sampling within the service region.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// latitude in decimal degrees
    pub lat: f64,
    /// longitude in decimal degrees
    pub lon: f64,
}

/// Rectangular lat/lon region that couriers are confined to.
#[derive(Debug, Copy, Clone)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// true when the given position lies within the box, bounds inclusive
    pub fn contains(&self, position: &Coordinates) -> bool {
        position.lat >= self.lat_min
            && position.lat <= self.lat_max
            && position.lon >= self.lon_min
            && position.lon <= self.lon_max
    }
}

/// The region couriers travel in (Porto Alegre).
pub const SERVICE_REGION: BoundingBox = BoundingBox {
    lat_min: -30.25,
    lat_max: -29.98,
    lon_min: -51.30,
    lon_max: -51.05,
};

/// Sample a uniformly random location within the given region.
///
/// Latitude and longitude are drawn independently, bounds inclusive.
pub fn random_location(region: &BoundingBox) -> Coordinates {
    let mut rng = rand::thread_rng();
    Coordinates {
        lat: rng.gen_range(region.lat_min..=region.lat_max),
        lon: rng.gen_range(region.lon_min..=region.lon_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_random_location_within_bounds() {
        crate::get_log_handle().await;
        ut_info!("(test_random_location_within_bounds) Start.");

        for _ in 0..1000 {
            let location = random_location(&SERVICE_REGION);
            assert!(SERVICE_REGION.contains(&location));
        }

        ut_info!("(test_random_location_within_bounds) Success.");
    }

    #[test]
    fn test_bounding_box_contains_is_inclusive() {
        let corner = Coordinates {
            lat: SERVICE_REGION.lat_min,
            lon: SERVICE_REGION.lon_max,
        };
        assert!(SERVICE_REGION.contains(&corner));

        let outside = Coordinates {
            lat: SERVICE_REGION.lat_max + 0.01,
            lon: SERVICE_REGION.lon_min,
        };
        assert!(!SERVICE_REGION.contains(&outside));
    }
}
