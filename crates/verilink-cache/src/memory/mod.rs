//! In-memory short-link store.

pub mod store;

pub use store::MemoryShortLinkStore;
