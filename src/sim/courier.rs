//! Courier entity, traveling in a straight line between random waypoints.

use crate::sim::location::{random_location, BoundingBox, Coordinates};
use crate::sim::STEP_SIZE_DEG;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a courier's public state, safe to hand to
/// external callers.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierSnapshot {
    /// unique courier id, 1..=N
    pub id: u32,
    /// start of the current leg
    pub origin: Coordinates,
    /// end of the current leg
    pub destiny: Coordinates,
    /// live position
    pub current: Coordinates,
}

/// A courier moving toward its destination one step per tick.
#[derive(Debug, Copy, Clone)]
pub struct Courier {
    pub id: u32,
    pub origin: Coordinates,
    pub destiny: Coordinates,
    pub current: Coordinates,
    /// per-tick (lat, lon) displacement toward `destiny`
    velocity: (f64, f64),
}

impl Courier {
    /// Create a courier at a random location with a random destination.
    pub fn new(id: u32, region: &BoundingBox) -> Self {
        let origin = random_location(region);
        let mut courier = Courier {
            id,
            origin,
            // Coordinates is Copy, so current moves independently of origin
            current: origin,
            destiny: random_location(region),
            velocity: (0.0, 0.0),
        };
        courier.update_velocity();
        courier
    }

    /// Recompute the velocity vector: the unit vector from `current`
    /// toward `destiny`, scaled by [`STEP_SIZE_DEG`]. Zero when the
    /// courier already sits exactly on its destination.
    fn update_velocity(&mut self) {
        let dy = self.destiny.lat - self.current.lat;
        let dx = self.destiny.lon - self.current.lon;
        let distance = (dx * dx + dy * dy).sqrt();

        self.velocity = if distance == 0.0 {
            (0.0, 0.0)
        } else {
            ((dy / distance) * STEP_SIZE_DEG, (dx / distance) * STEP_SIZE_DEG)
        };
    }

    /// Advance one simulation step.
    ///
    /// When the stepped position would land within one step of the
    /// destination, the courier snaps exactly onto it and re-targets in
    /// the same tick rather than drifting past.
    pub fn tick(&mut self, region: &BoundingBox) {
        let candidate = Coordinates {
            lat: self.current.lat + self.velocity.0,
            lon: self.current.lon + self.velocity.1,
        };

        let d_lat = self.destiny.lat - candidate.lat;
        let d_lon = self.destiny.lon - candidate.lon;
        let remaining_sq = d_lat * d_lat + d_lon * d_lon;

        if remaining_sq < STEP_SIZE_DEG * STEP_SIZE_DEG {
            self.arrive(region);
        } else {
            self.current = candidate;
        }
    }

    /// The reached destination becomes the new origin and a fresh
    /// random destination is picked, so couriers never pause at a
    /// waypoint.
    fn arrive(&mut self, region: &BoundingBox) {
        self.origin = self.destiny;
        self.current = self.destiny;
        self.destiny = random_location(region);
        self.update_velocity();
    }

    /// Immutable copy of the courier state for external consumption.
    pub fn snapshot(&self) -> CourierSnapshot {
        CourierSnapshot {
            id: self.id,
            origin: self.origin,
            destiny: self.destiny,
            current: self.current,
        }
    }

    /// Courier with a fixed route instead of random waypoints.
    #[cfg(test)]
    pub(crate) fn from_route(id: u32, origin: Coordinates, destiny: Coordinates) -> Self {
        let mut courier = Courier {
            id,
            origin,
            current: origin,
            destiny,
            velocity: (0.0, 0.0),
        };
        courier.update_velocity();
        courier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::location::SERVICE_REGION;

    #[tokio::test]
    async fn test_travel_and_arrival() {
        crate::get_log_handle().await;
        ut_info!("(test_travel_and_arrival) Start.");

        // One step is 0.0001 degrees; a 0.00025 degree leg takes two
        // ticks, the second of which lands within reach and snaps.
        let origin = Coordinates { lat: 0.0, lon: 0.0 };
        let destiny = Coordinates { lat: 0.0, lon: 0.00025 };
        let mut courier = Courier::from_route(1, origin, destiny);

        courier.tick(&SERVICE_REGION);
        assert_eq!(courier.current.lat, 0.0);
        assert!((courier.current.lon - 0.0001).abs() < 1e-9);
        assert_eq!(courier.destiny, destiny);

        courier.tick(&SERVICE_REGION);
        assert_eq!(courier.origin, destiny);
        assert_eq!(courier.current, destiny);
        assert!(SERVICE_REGION.contains(&courier.destiny));

        ut_info!("(test_travel_and_arrival) Success.");
    }

    #[tokio::test]
    async fn test_eventually_arrives() {
        crate::get_log_handle().await;
        ut_info!("(test_eventually_arrives) Start.");

        let origin = Coordinates {
            lat: -30.10,
            lon: -51.20,
        };
        let destiny = Coordinates {
            lat: -30.05,
            lon: -51.10,
        };
        let mut courier = Courier::from_route(1, origin, destiny);

        let d_lat = destiny.lat - origin.lat;
        let d_lon = destiny.lon - origin.lon;
        let distance = (d_lat * d_lat + d_lon * d_lon).sqrt();
        let max_ticks = (distance / crate::sim::STEP_SIZE_DEG).ceil() as usize + 2;

        let mut arrived = false;
        for _ in 0..max_ticks {
            courier.tick(&SERVICE_REGION);
            if courier.origin == destiny {
                arrived = true;
                break;
            }
        }

        assert!(arrived, "courier did not arrive within {} ticks", max_ticks);
        // The just-reached waypoint is both the new origin and the new
        // current position, as independent copies.
        assert_eq!(courier.current, courier.origin);

        ut_info!("(test_eventually_arrives) Success.");
    }

    #[test]
    fn test_zero_distance_velocity() {
        let position = Coordinates {
            lat: -30.0,
            lon: -51.2,
        };
        let courier = Courier::from_route(1, position, position);
        assert_eq!(courier.velocity, (0.0, 0.0));
    }

    #[test]
    fn test_velocity_magnitude_is_one_step() {
        let origin = Coordinates {
            lat: -30.10,
            lon: -51.20,
        };
        let destiny = Coordinates {
            lat: -30.00,
            lon: -51.10,
        };
        let courier = Courier::from_route(1, origin, destiny);

        let (v_lat, v_lon) = courier.velocity;
        let magnitude = (v_lat * v_lat + v_lon * v_lon).sqrt();
        assert!((magnitude - STEP_SIZE_DEG).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let origin = Coordinates {
            lat: -30.10,
            lon: -51.20,
        };
        let destiny = Coordinates {
            lat: -30.00,
            lon: -51.10,
        };
        let mut courier = Courier::from_route(7, origin, destiny);

        let snapshot = courier.snapshot();
        assert_eq!(snapshot.id, 7);
        assert_eq!(snapshot.origin, origin);
        assert_eq!(snapshot.destiny, destiny);
        assert_eq!(snapshot.current, origin);

        courier.tick(&SERVICE_REGION);
        assert_eq!(snapshot.current, origin);
        assert_ne!(courier.current, snapshot.current);
    }
}
