//! File change watching for credential rotation.
//!
//! A [`FileWatcher`](structs::file_watcher::FileWatcher) observes the parent
//! directory of a single file and runs a callback once per burst of relevant
//! change events. Watching the directory instead of the file means rotation
//! schemes that write a new file and swap a symlink (as Kubernetes does for
//! mounted secrets) are seen as well as in-place writes.
//!
//! Each watch owns one OS thread. The thread blocks on the notify event channel,
//! drains follow-up events for the coalescing window and then invokes the
//! callback. Callback errors and panics are logged and never stop the loop.
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_utils::watcher::structs::file_watcher::FileWatcher;
//!
//! let watcher = FileWatcher::watch("/etc/certs/keystore.pem", Box::new(|| {
//!     println!("key store changed");
//!     Ok(())
//! }))?;
//! watcher.shutdown();
//! ```

/// Watch errors.
pub mod enums;

/// Watch loop and event relevance checks.
#[allow(clippy::module_inception)]
pub mod watcher;

/// Watch data structures.
pub mod structs;

/// Implementation blocks for watch types.
pub mod impls;

/// Callback type aliases.
pub mod types;

/// Unit tests for the watcher.
pub mod tests;
