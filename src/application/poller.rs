//! Fixed-interval poll loop.
//!
//! Each tick snapshots the [`TrackingRegistry`] and spawns one detached task
//! per tracked chat: lookup, then delivery. A slow or failing lookup for one
//! chat never delays another chat or the next tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use super::registry::TrackingRegistry;
use crate::domain::{ChatKey, TrackedTarget};
use crate::error::LookupError;
use crate::port::{ChatTransport, Notice, PriceSource};

/// Poll loop tuning.
#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    /// Time between ticks.
    pub interval: Duration,
    /// Send a notice to the chat when a lookup fails transiently.
    pub notify_lookup_failures: bool,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            notify_lookup_failures: true,
        }
    }
}

/// Drives lookups for every tracked chat on a timer.
#[derive(Clone)]
pub struct Poller {
    registry: Arc<TrackingRegistry>,
    prices: Arc<dyn PriceSource>,
    transport: Arc<dyn ChatTransport>,
    settings: PollSettings,
}

impl Poller {
    #[must_use]
    pub fn new(
        registry: Arc<TrackingRegistry>,
        prices: Arc<dyn PriceSource>,
        transport: Arc<dyn ChatTransport>,
        settings: PollSettings,
    ) -> Self {
        Self {
            registry,
            prices,
            transport,
            settings,
        }
    }

    /// Tick until `shutdown` flips to `true` or its sender is dropped.
    ///
    /// The first tick fires immediately.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.settings.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            interval_secs = self.settings.interval.as_secs(),
            source = self.prices.name(),
            "Poll loop started"
        );

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    match result {
                        Ok(()) => {
                            if *shutdown.borrow() {
                                info!("Poll loop shutting down");
                                break;
                            }
                        }
                        Err(_) => {
                            info!("Shutdown channel closed");
                            break;
                        }
                    }
                }
                _ = ticker.tick() => {
                    let dispatched = self.dispatch_tick();
                    debug!(chats = dispatched.len(), "Tick dispatched");
                }
            }
        }
    }

    /// Run one tick: snapshot the registry and spawn a task per chat.
    ///
    /// The returned handles are for callers that want to wait; the loop
    /// itself never awaits them.
    pub fn dispatch_tick(&self) -> Vec<JoinHandle<()>> {
        self.registry
            .snapshot()
            .into_iter()
            .map(|(chat, target)| {
                let poller = self.clone();
                tokio::spawn(async move { poller.poll_target(chat, target).await })
            })
            .collect()
    }

    /// Look up one target and deliver the outcome to its chat.
    pub async fn poll_target(&self, chat: ChatKey, target: TrackedTarget) {
        let result = self.prices.fetch(&target).await;

        match &result {
            Ok(quote) => debug!(
                chat_id = chat.get(),
                network = target.network(),
                address = target.address(),
                price_usd = %quote.price_usd,
                "Price fetched"
            ),
            Err(LookupError::NotFound) => info!(
                chat_id = chat.get(),
                network = target.network(),
                address = target.address(),
                "Token not found"
            ),
            Err(LookupError::Transient(reason)) => warn!(
                chat_id = chat.get(),
                network = target.network(),
                address = target.address(),
                error = %reason,
                "Price lookup failed"
            ),
        }

        let Some(notice) =
            Notice::from_lookup(target, result, self.settings.notify_lookup_failures)
        else {
            return;
        };

        // The chat may have re-targeted or stopped while the lookup was in flight.
        if self.registry.get(chat).as_ref() != Some(notice.target()) {
            debug!(chat_id = chat.get(), "Target changed during lookup, dropping notice");
            return;
        }

        if let Err(e) = self.transport.send(chat, &notice).await {
            error!(chat_id = chat.get(), error = %e, "Failed to deliver notice");
        }
    }
}
