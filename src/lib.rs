//! Shutdown-on-ready addon for an intercepting-proxy host.
//!
//! The host drives its extensions through an ordered [`AddonSet`]; once its
//! internal setup (certificate-authority generation included) has completed,
//! it fires the `running` event at every registered addon. The shipped
//! [`ShutdownOnReady`] addon answers that event with a single call to the
//! host's shutdown capability, so a host started with it terminates as soon
//! as it becomes ready.
//!
//! Hooks never touch host globals: the host hands each hook a
//! [`HostContext`] carrying the capabilities addons may use, and keeps the
//! matching [`ShutdownSignal`] to find out when an addon has asked it to
//! stop.
//!
//! # Example
//!
//! ```
//! use shutdown_on_ready::{AddonSet, HostContext, ShutdownOnReady, shutdown_channel};
//!
//! let (handle, signal) = shutdown_channel();
//! let context = HostContext::new(handle);
//!
//! let mut addons = AddonSet::new();
//! addons.register(Box::new(ShutdownOnReady::new())).unwrap();
//!
//! // The host fires `running` once its setup has completed.
//! addons.notify_running(&context);
//! assert!(signal.is_requested());
//! ```

mod addon;
mod builtin;
mod host;

pub use addon::{Addon, AddonError, AddonSet};
pub use builtin::ShutdownOnReady;
pub use host::{HostContext, ShutdownHandle, ShutdownSignal, shutdown_channel};
