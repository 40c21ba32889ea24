//! Core traits defined in `verilink-core` and implemented by other crates.

pub mod shortlink_store;

pub use shortlink_store::ShortLinkStore;
