// src/stores/mod.rs

//! Persistence collaborators. Each store is a trait describing the query
//! shapes the application depends on, with a Postgres implementation; the
//! domain logic never sees the backing database.

pub mod catalog;
pub mod entitlements;
pub mod users;

pub use catalog::{CatalogStore, PgCatalogStore};
pub use entitlements::{EntitlementStore, PgEntitlementStore};
pub use users::{PgUserStore, UserStore};
