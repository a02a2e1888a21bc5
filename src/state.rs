// src/state.rs

use crate::config::AppConfig;
use crate::stores::{CatalogStore, EntitlementStore, PgCatalogStore, PgEntitlementStore, PgUserStore, UserStore};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state handed to every handler. The stores are trait
/// objects so tests can substitute in-memory doubles for Postgres.
#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<dyn CatalogStore>,
  pub entitlements: Arc<dyn EntitlementStore>,
  pub users: Arc<dyn UserStore>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// Wires the Postgres-backed stores around a shared connection pool.
  pub fn postgres(pool: PgPool, config: Arc<AppConfig>) -> Self {
    Self {
      catalog: Arc::new(PgCatalogStore::new(pool.clone())),
      entitlements: Arc::new(PgEntitlementStore::new(pool.clone())),
      users: Arc::new(PgUserStore::new(pool)),
      config,
    }
  }
}
