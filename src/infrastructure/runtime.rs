//! Bot runtime lifecycle.
//!
//! Wires the registry, price client, Telegram transport and command listener
//! together, then runs the poll loop until shutdown.

use std::future::Future;
use std::sync::Arc;

use teloxide::Bot;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::config::Config;
use crate::adapter::outbound::coingecko::CoinGecko;
use crate::adapter::outbound::telegram::{run_command_listener, TelegramTransport, TrackingControl};
use crate::application::{PollSettings, Poller, TrackingRegistry};
use crate::error::{Error, Result};
use crate::port::{ChatTransport, PriceSource};

/// Run the bot until `shutdown` flips to `true` or its sender is dropped.
///
/// # Errors
///
/// Returns an error if the price client cannot be built or the command
/// listener stops while the poll loop is still running.
pub async fn run(config: Config, shutdown: watch::Receiver<bool>) -> Result<()> {
    let settings = PollSettings::from(&config.poll);
    info!(
        interval_secs = settings.interval.as_secs(),
        notify_lookup_failures = settings.notify_lookup_failures,
        "Starting tokenwatch"
    );

    let registry = Arc::new(TrackingRegistry::new());

    let prices: Arc<dyn PriceSource> = Arc::new(CoinGecko::new(
        &config.price_api.base_url,
        config.credentials.price_api_key(),
        config.price_api.timeout(),
    )?);

    let bot = Bot::new(config.credentials.telegram_token());
    let transport: Arc<dyn ChatTransport> = Arc::new(TelegramTransport::new(
        bot.clone(),
        config.price_api.chart_base_url.clone(),
    ));

    let control = TrackingControl::new(Arc::clone(&registry), settings.interval);
    let listener = tokio::spawn(run_command_listener(
        bot,
        control,
        config.telegram.register_commands,
    ));

    let poller = Poller::new(registry, prices, transport, settings);
    supervise(poller.run(shutdown), listener).await?;

    info!("tokenwatch stopped");
    Ok(())
}

/// Drive the poll loop while watching the command listener.
///
/// The listener is aborted once polling ends. If the listener ends first the
/// bot can no longer take commands, so polling stops with an error.
async fn supervise<F>(polling: F, mut listener: JoinHandle<()>) -> Result<()>
where
    F: Future<Output = ()>,
{
    tokio::select! {
        () = polling => {
            listener.abort();
            Ok(())
        }
        result = &mut listener => {
            let reason = match result {
                Ok(()) => "command listener exited".to_string(),
                Err(e) if e.is_panic() => "command listener panicked".to_string(),
                Err(e) => format!("command listener failed: {e}"),
            };
            error!(reason = %reason, "Stopping poll loop");
            Err(Error::Connection(reason))
        }
    }
}
