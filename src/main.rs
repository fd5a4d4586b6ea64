//! Entry point: connect, prompt, run until the operator quits.

use std::env;

use tracing::{error, info};

use order_loadgen::config::Config;
use order_loadgen::input;
use order_loadgen::runtime::{setup_tracing, LoadSystem};
use order_loadgen::transport::TransportError;

#[tokio::main]
async fn main() -> Result<(), TransportError> {
    setup_tracing();

    let mut config = Config::default();
    if let Some(endpoint) = env::args().nth(1) {
        config.endpoint = endpoint;
    }
    config.user_id = input::prompt_user_id().await;

    info!(
        endpoint = %config.endpoint,
        user_id = ?config.user_id,
        "starting order load generator"
    );

    let system = match LoadSystem::connect(config).await {
        Ok(system) => system,
        Err(e) => {
            error!(error = %e, "could not reach the order endpoint");
            return Err(e);
        }
    };

    println!("Commands: s = send one order, a = toggle auto-generation, q = quit");
    system.run().await;

    Ok(())
}
