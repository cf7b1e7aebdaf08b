//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Uses `RETURNING` so writes hand back the stored row in one round trip
//! - Binds every value as a parameter
//! - Reports a missing row as `None`/`false`, not as an error

pub mod items;

pub use items::ItemRepo;
