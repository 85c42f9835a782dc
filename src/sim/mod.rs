//! Simulation
//! provides the geo sampler, courier entities and the background tick loop

#[macro_use]
pub mod macros;
pub mod courier;
pub mod fleet;
pub mod location;

use crate::sim::fleet::Fleet;
use std::sync::Arc;
use std::time::Duration;

/// Number of couriers in the fleet
pub const NUM_COURIERS: u32 = 10;

/// Courier travel speed in degrees per second (roughly 10 meters per second)
pub const SPEED_DEG_PER_SEC: f64 = 0.001;

/// Time between two simulation ticks, in seconds
pub const TICK_INTERVAL_SEC: f64 = 0.1;

/// Time between two simulation ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Distance a courier covers in a single tick, in degrees
pub const STEP_SIZE_DEG: f64 = SPEED_DEG_PER_SEC * TICK_INTERVAL_SEC;

/// Main simulation loop for this service.
///
/// Advances every courier by one step, then sleeps for the tick
/// interval. Runs until process shutdown; a tick that overruns the
/// interval simply delays the next cycle.
pub async fn simulation_loop(fleet: Arc<Fleet>) {
    sim_info!(
        "(simulation_loop) Start. Tick interval [{}] ms.",
        TICK_INTERVAL.as_millis()
    );

    loop {
        fleet.tick().await;
        tokio::time::sleep(TICK_INTERVAL).await;
    }
}
