use anyhow::Result;
use log::{error, info};
use crate::errors::RunError;
use crate::initialization::init;
use crate::worker::run;

mod errors;
mod config;
mod initialization;
mod logging;
mod macros;
mod manager_broker;
mod manager_forecast;
mod rainfall;
pub mod models;
mod worker;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config, set up logging and the broker client. If initialization fails we can't even log.
    let (config, mgr) = match init() {
        Ok((c, m)) => (c, m),
        Err(e) => {
            return Err(RunError(format!("Initialization failed: {}", e)))?;
        }
    };

    match run(&config, &mgr).await {
        Ok(_) => {
            info!("worker stopped");
        },
        Err(e) => {
            error!("Run failed: {}", e);
            return Err(e)?;
        }
    }

    Ok(())
}
