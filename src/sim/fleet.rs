//! Fixed-size courier fleet, shared between the tick loop and the REST
//! handlers.

use crate::sim::courier::{Courier, CourierSnapshot};
use crate::sim::location::BoundingBox;
use tokio::sync::RwLock;

/// Ordered collection of couriers behind a single read/write lock.
///
/// Constructed once at startup, shared through an
/// [`Arc`](std::sync::Arc) and never resized. The simulation loop takes
/// the write lock once per tick; readers either observe the fleet fully
/// before or fully after a tick.
#[derive(Debug)]
pub struct Fleet {
    region: BoundingBox,
    couriers: RwLock<Vec<Courier>>,
}

impl Fleet {
    /// Create `size` couriers with sequential IDs starting at 1, each
    /// with independent random waypoints.
    pub fn new(size: u32, region: BoundingBox) -> Self {
        sim_info!("(new) Creating fleet of [{}] couriers.", size);
        let couriers = (1..=size).map(|id| Courier::new(id, &region)).collect();
        Fleet {
            region,
            couriers: RwLock::new(couriers),
        }
    }

    /// Snapshot of every courier, in fleet (ID) order.
    pub async fn snapshots(&self) -> Vec<CourierSnapshot> {
        self.couriers
            .read()
            .await
            .iter()
            .map(Courier::snapshot)
            .collect()
    }

    /// Snapshot of the courier with the given ID, if any.
    pub async fn snapshot(&self, id: u32) -> Option<CourierSnapshot> {
        self.couriers
            .read()
            .await
            .iter()
            .find(|courier| courier.id == id)
            .map(Courier::snapshot)
    }

    /// Advance every courier by one step, in fleet order.
    pub async fn tick(&self) {
        let mut couriers = self.couriers.write().await;
        for courier in couriers.iter_mut() {
            courier.tick(&self.region);
        }
    }
}
