use clap::Parser;
use tokenwatch::cli::Cli;
use tokenwatch::infrastructure::config::Config;
use tokenwatch::infrastructure::runtime;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if cli.check_config {
        println!("Configuration OK");
        return;
    }

    config.init_logging();
    info!("tokenwatch starting");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut app = tokio::spawn(runtime::run(config, shutdown_rx));

    tokio::select! {
        result = &mut app => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!(error = %e, "Fatal error");
                    std::process::exit(1);
                }
                Err(e) => {
                    error!(error = %e, "Runtime task failed");
                    std::process::exit(1);
                }
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
            let _ = app.await;
        }
    }
}
