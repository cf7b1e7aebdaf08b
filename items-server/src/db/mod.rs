//! Database layer - connection pool, store trait and implementations
//!
//! # Design Principles
//!
//! - One eagerly connected pool sized by `DatabaseConfig` - no Arc<Mutex<Connection>>
//! - Every caller value is a bound parameter, never part of the SQL text
//! - One statement per operation, no multi-step transactions
//! - Handlers only see `dyn ItemStore`, so tests can swap in `MemoryItemStore`

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;
pub mod update;

pub use memory::MemoryItemStore;
pub use pool::{connect, DatabaseConfig};
pub use repos::ItemRepo;
pub use store::{ItemStore, StoreError};
pub use update::UpdateStatement;
