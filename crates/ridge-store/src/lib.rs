//! Type-safe key-value persistence for the Ridgeline storefront.
//!
//! The storefront persists small JSON blobs (cart snapshots, session
//! state) under string keys. [`Cache`] is the typed front door; the
//! [`KvBackend`] trait hides where bytes live — in memory for tests and
//! per-tab state, on disk for anything that must survive a restart.

mod error;
mod file;
mod kv;
mod memory;

pub use error::StoreError;
pub use file::FileBackend;
pub use kv::{Cache, KvBackend};
pub use memory::MemoryBackend;
