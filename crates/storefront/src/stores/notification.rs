//! Transient toast notifications.
//!
//! A single notification slot. `show` replaces whatever is there and arms an
//! auto-hide timer; a later `show` or `hide` cancels the pending timer so a
//! stale timeout can never hide a newer message.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

/// The notification slot's contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Hidden notifications keep their message but must not be rendered.
    pub visible: bool,
}

#[derive(Debug, Default)]
struct Slot {
    current: Notification,
    /// Bumped on every `show`; a timer only hides the generation it was armed for.
    generation: u64,
    timer: Option<CancellationToken>,
}

impl Slot {
    fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

/// Holds at most one notification and hides it after a fixed delay.
///
/// Cheap to clone; clones share the same slot.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    slot: Arc<Mutex<Slot>>,
    timeout: Duration,
}

impl NotificationStore {
    /// Default auto-hide delay.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    /// Create an empty store that auto-hides after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timeout,
        }
    }

    /// Replace the current notification and make it visible.
    ///
    /// Restarts the auto-hide window. Outside a tokio runtime there is no
    /// timer and the notification stays up until [`Self::hide`].
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        debug!(?kind, %message, "Showing notification");

        let (generation, token) = {
            let mut slot = self.slot();
            slot.disarm();
            slot.generation = slot.generation.wrapping_add(1);
            slot.current = Notification {
                message,
                kind,
                visible: true,
            };
            let token = CancellationToken::new();
            slot.timer = Some(token.clone());
            (slot.generation, token)
        };

        self.arm(generation, token);
    }

    /// Shorthand for a success notification.
    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    /// Shorthand for an error notification.
    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    /// Hide the current notification, keeping its message.
    pub fn hide(&self) {
        let mut slot = self.slot();
        slot.disarm();
        slot.current.visible = false;
    }

    /// Snapshot of the current notification.
    #[must_use]
    pub fn current(&self) -> Notification {
        self.slot().current.clone()
    }

    /// Whether a notification is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.slot().current.visible
    }

    /// The configured auto-hide delay.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn arm(&self, generation: u64, token: CancellationToken) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            debug!("No async runtime, notification will stay until hidden");
            return;
        };

        let store = self.clone();
        let timeout = self.timeout;
        runtime.spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(timeout) => store.expire(generation),
            }
        });
    }

    fn expire(&self, generation: u64) {
        let mut slot = self.slot();
        if slot.generation == generation {
            debug!("Notification timed out");
            slot.current.visible = false;
            slot.timer = None;
        }
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT)
    }
}
