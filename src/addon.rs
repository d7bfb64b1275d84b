//! Addon registration and lifecycle dispatch.
//!
//! The host keeps its active extensions in an [`AddonSet`] and fires
//! lifecycle events at them in registration order. Two events exist:
//! `running`, fired once the host has completed its internal setup, and
//! `done`, fired when the host is about to exit.

use thiserror::Error;
use tracing::{debug, warn};

use crate::host::HostContext;

#[derive(Debug, Error)]
pub enum AddonError {
    #[error("addon already registered: {0}")]
    DuplicateAddon(String),
}

/// A host extension driven through lifecycle events.
pub trait Addon {
    /// Stable name, used for registration conflicts and log attribution.
    fn name(&self) -> &str;

    /// Called once the host has completed its internal setup, certificate
    /// authority materialization included.
    fn running(&mut self, host: &HostContext);

    /// Called when the host is about to exit.
    fn done(&mut self) {}
}

/// Ordered list of active addons.
///
/// Dispatch order is registration order. The `running` and `done` events
/// each fire at most once over the life of a set.
#[derive(Default)]
pub struct AddonSet {
    addons: Vec<Box<dyn Addon>>,
    running_fired: bool,
    done_fired: bool,
}

impl AddonSet {
    /// Creates an empty addon set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an addon. Names must be unique within the set.
    pub fn register(&mut self, addon: Box<dyn Addon>) -> Result<(), AddonError> {
        if self.addons.iter().any(|a| a.name() == addon.name()) {
            return Err(AddonError::DuplicateAddon(addon.name().to_string()));
        }
        debug!("registered addon: {}", addon.name());
        self.addons.push(addon);
        Ok(())
    }

    /// Fires the `running` event at every addon in registration order.
    ///
    /// Fires at most once; a repeated call is ignored.
    pub fn notify_running(&mut self, host: &HostContext) {
        if self.running_fired {
            warn!("running event already dispatched, ignoring");
            return;
        }
        self.running_fired = true;

        debug!("dispatching running to {} addons", self.addons.len());
        for addon in &mut self.addons {
            debug!("running: {}", addon.name());
            addon.running(host);
        }
    }

    /// Fires the `done` event at every addon in registration order.
    ///
    /// Fires at most once; a repeated call is ignored.
    pub fn notify_done(&mut self) {
        if self.done_fired {
            warn!("done event already dispatched, ignoring");
            return;
        }
        self.done_fired = true;

        debug!("dispatching done to {} addons", self.addons.len());
        for addon in &mut self.addons {
            debug!("done: {}", addon.name());
            addon.done();
        }
    }

    /// Number of registered addons.
    pub fn len(&self) -> usize {
        self.addons.len()
    }

    /// Returns whether the set has no addons.
    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }
}
