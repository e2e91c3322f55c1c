//! Domain layer for the showcase backend.
//!
//! Zero internal dependencies so it can be used by the repository layer,
//! the API, and any future CLI tooling alike.

pub mod error;
pub mod slug;
pub mod types;
pub mod uploads;
pub mod validate;
