//! Route handlers organized by domain.

pub mod health;
pub mod link;
pub mod shortlink;
pub mod verify;
