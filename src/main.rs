//! Main function starting the simulation loop and the REST server.

use log::info;
use std::sync::Arc;
use svc_courier::sim::fleet::Fleet;
use svc_courier::sim::location::SERVICE_REGION;
use svc_courier::sim::{self, NUM_COURIERS};
use svc_courier::*;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Will use default config settings if no environment vars are found.
    let config = Config::try_from_env()
        .map_err(|e| format!("Failed to load configuration from environment: {}", e))?;

    info!("(main) Loading config.");

    // Try to load log configuration from the provided log file.
    // Will default to stdout debug logging if the file can not be loaded.
    load_logger_config_from_file(config.log_config.as_str())
        .await
        .or_else(|e| Ok::<(), String>(log::error!("(main) {}", e)))?;

    info!("(main) Server startup.");

    let fleet = Arc::new(Fleet::new(NUM_COURIERS, SERVICE_REGION));

    // Spawn the simulation tick loop, don't `await` it
    tokio::spawn(sim::simulation_loop(fleet.clone()));

    // Spawn the REST server for this service
    tokio::spawn(rest::server::rest_server(config, fleet, None))
        .await?
        .map_err(|_| "REST server failed.")?;

    info!("(main) server shutdown.");

    // Make sure all log message are written/ displayed before shutdown
    log::logger().flush();

    Ok(())
}
