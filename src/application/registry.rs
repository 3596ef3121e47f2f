//! Per-chat tracking registry.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::{ChatKey, TrackedTarget};

/// Process-wide mapping from chat to the one target it tracks.
///
/// Every operation takes the lock exactly once, so each call is atomic with
/// respect to the others. The map itself is never handed out.
#[derive(Debug, Default)]
pub struct TrackingRegistry {
    targets: RwLock<HashMap<ChatKey, TrackedTarget>>,
}

impl TrackingRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `target` for `chat`, replacing whatever it tracked before.
    ///
    /// Returns the replaced target, if any.
    pub fn set(&self, chat: ChatKey, target: TrackedTarget) -> Option<TrackedTarget> {
        self.targets.write().insert(chat, target)
    }

    /// Stop tracking for `chat`. No-op if nothing is tracked.
    ///
    /// Returns the removed target, if any.
    pub fn clear(&self, chat: ChatKey) -> Option<TrackedTarget> {
        self.targets.write().remove(&chat)
    }

    /// Owned copy of every (chat, target) pair at this instant.
    ///
    /// Later mutations do not affect the returned vector.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(ChatKey, TrackedTarget)> {
        self.targets
            .read()
            .iter()
            .map(|(chat, target)| (*chat, target.clone()))
            .collect()
    }

    /// Current target for `chat`.
    #[must_use]
    pub fn get(&self, chat: ChatKey) -> Option<TrackedTarget> {
        self.targets.read().get(&chat).cloned()
    }

    /// Number of chats currently tracking a target.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.read().is_empty()
    }
}
