use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;
use tokenwatch::domain::{TokenQuote, TrackedTarget};
use tokenwatch::error::LookupError;
use tokenwatch::port::PriceSource;

/// Price source answering from a per-address script.
///
/// Unscripted addresses resolve to `NotFound`. Every call is recorded.
#[derive(Clone, Default)]
pub struct ScriptedPriceSource {
    results: Arc<Mutex<HashMap<String, Result<TokenQuote, LookupError>>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    gates: Arc<Mutex<HashMap<String, Arc<Notify>>>>,
    calls: Arc<Mutex<Vec<TrackedTarget>>>,
}

impl ScriptedPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, address: &str, result: Result<TokenQuote, LookupError>) {
        self.results.lock().insert(address.to_string(), result);
    }

    /// Sleep before answering for `address`.
    pub fn delay(&self, address: &str, delay: Duration) {
        self.delays.lock().insert(address.to_string(), delay);
    }

    /// Hold lookups for `address` until the returned handle is notified.
    pub fn gate(&self, address: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .insert(address.to_string(), Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> Vec<TrackedTarget> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl PriceSource for ScriptedPriceSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self, target: &TrackedTarget) -> Result<TokenQuote, LookupError> {
        self.calls.lock().push(target.clone());

        let gate = self.gates.lock().get(target.address()).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let delay = self.delays.lock().get(target.address()).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.results
            .lock()
            .get(target.address())
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }
}
