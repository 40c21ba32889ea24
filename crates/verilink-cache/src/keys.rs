//! Store key builders.
//!
//! Backends that share a keyspace with other data (Redis) namespace every
//! entry through these helpers; the configured key prefix is applied on top.

/// Key under which the token for a short code is stored.
pub fn short_link(code: &str) -> String {
    format!("shortlink:{code}")
}
