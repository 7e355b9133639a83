//! luxsync - Fetch one LuxPower inverter snapshot and store it in TimescaleDB.
//! The process runs a single cycle and exits; polling is left to an external
//! scheduler, so a single-threaded runtime is enough.
use luxsync::app;
use luxsync::core::Error;
use luxsync::core::config::configure_logger;

enum ExitCode {
    Success = 0,
    RuntimeError = 1,
    ConfigError = 2,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    configure_logger();

    match app().await {
        Ok(()) => std::process::exit(ExitCode::Success as i32),
        Err(Error::Config(e)) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(ExitCode::ConfigError as i32);
        }
        Err(e) => {
            log::error!("Run failed: {e}");
            std::process::exit(ExitCode::RuntimeError as i32);
        }
    }
}
