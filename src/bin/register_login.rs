//! Registers an account with a full profile, then logs in with it.
//!
//! Configuration comes from `.env` and `SMOKE_*` environment variables.
use std::process::ExitCode;
use transfer_smoke::application::runner::run_to_stdout;
use transfer_smoke::prelude::*;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger();
    let config = Config::new();
    info!("Target: {}", config.rest_api.base_url);
    run_to_stdout(Scenario::RegisterLogin, config).await
}
