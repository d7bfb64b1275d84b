//! Addons shipped with the crate.

use tracing::info;

use crate::addon::Addon;
use crate::host::HostContext;

/// Asks the host to shut down as soon as it reports ready.
///
/// Registering this addon turns a host run into a warm-up pass: the host
/// finishes its setup, generating its certificate authority along the way,
/// fires `running`, and is immediately told to terminate.
#[derive(Debug, Default)]
pub struct ShutdownOnReady;

impl ShutdownOnReady {
    /// Creates the addon.
    pub fn new() -> Self {
        Self
    }
}

impl Addon for ShutdownOnReady {
    fn name(&self) -> &str {
        "shutdown-on-ready"
    }

    fn running(&mut self, host: &HostContext) {
        info!("host setup complete, requesting shutdown");
        host.request_shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::shutdown_channel;

    /// The readiness hook requests shutdown through the host context.
    #[test]
    fn requests_shutdown_on_running() {
        let (handle, signal) = shutdown_channel();
        let host = HostContext::new(handle);
        let mut addon = ShutdownOnReady::new();

        addon.running(&host);

        assert!(signal.is_requested());
    }

    /// Nothing is requested until the readiness hook actually fires.
    #[test]
    fn no_request_before_running() {
        let (handle, signal) = shutdown_channel();
        let _host = HostContext::new(handle);
        let _addon = ShutdownOnReady::new();

        assert!(!signal.is_requested());
    }
}
