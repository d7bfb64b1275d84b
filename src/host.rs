//! Host control surface passed to addon lifecycle hooks.
//!
//! The host owns the [`ShutdownSignal`] and hands out clones of the matching
//! [`ShutdownHandle`] to whatever may request termination. Addons never hold
//! the handle themselves: hooks receive a [`HostContext`] and go through it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;
use tracing::{debug, info};

/// Shared latch behind a handle/signal pair.
struct ShutdownState {
    requested: AtomicBool,
    notify: Notify,
}

/// Creates a connected shutdown handle/signal pair.
///
/// The handle side requests termination; the signal side is held by the host
/// event loop and resolves once a request has been made.
pub fn shutdown_channel() -> (ShutdownHandle, ShutdownSignal) {
    let state = Arc::new(ShutdownState {
        requested: AtomicBool::new(false),
        notify: Notify::new(),
    });
    (
        ShutdownHandle {
            state: Arc::clone(&state),
        },
        ShutdownSignal { state },
    )
}

/// Capability to request orderly host termination.
#[derive(Clone)]
pub struct ShutdownHandle {
    state: Arc<ShutdownState>,
}

impl ShutdownHandle {
    /// Requests host shutdown.
    ///
    /// The request latches: the first call wakes the signal side, repeated
    /// calls change nothing.
    pub fn request(&self) {
        if self.state.requested.swap(true, Ordering::AcqRel) {
            debug!("shutdown already requested");
            return;
        }
        info!("shutdown requested");
        self.state.notify.notify_waiters();
    }
}

/// Receiver side of the shutdown latch.
pub struct ShutdownSignal {
    state: Arc<ShutdownState>,
}

impl ShutdownSignal {
    /// Resolves once shutdown has been requested.
    ///
    /// Resolves immediately when the request already happened before the
    /// call.
    pub async fn requested(&self) {
        loop {
            let notified = self.state.notify.notified();
            tokio::pin!(notified);
            // Register with the Notify before checking the flag, otherwise a
            // request landing between the check and the await is lost.
            notified.as_mut().enable();
            if self.is_requested() {
                return;
            }
            notified.await;
        }
    }

    /// Returns whether shutdown has been requested.
    pub fn is_requested(&self) -> bool {
        self.state.requested.load(Ordering::Acquire)
    }
}

/// Host-wide context handed to addon lifecycle hooks.
///
/// Carries the capabilities an addon may ask of the host. Hooks receive a
/// reference to this at invocation time instead of reaching into globals.
pub struct HostContext {
    shutdown: ShutdownHandle,
}

impl HostContext {
    /// Creates a context exposing the given shutdown capability.
    pub fn new(shutdown: ShutdownHandle) -> Self {
        Self { shutdown }
    }

    /// Asks the host to terminate. No confirmation is returned.
    pub fn request_shutdown(&self) {
        self.shutdown.request();
    }
}
