// src/stores/entitlements.rs

use crate::errors::Result;
use crate::models::ENTITLING_STATUSES;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Read-only window onto the order history written by the external
/// checkout and fulfillment services. Nothing here mutates an order.
#[async_trait]
pub trait EntitlementStore: Send + Sync {
  /// True iff any order of `user_id` whose status confers entitlement
  /// contains an item for `product_id`. One qualifying order is enough;
  /// further purchases change nothing.
  async fn has_qualifying_order(&self, user_id: Uuid, product_id: Uuid) -> Result<bool>;

  /// Distinct product ids across the user's entitling orders, most
  /// recently ordered first.
  async fn purchased_product_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>>;
}

pub struct PgEntitlementStore {
  pool: PgPool,
}

impl PgEntitlementStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  // Bound as text[] so the SQL filters on the same status set the domain
  // logic defines.
  fn entitling_statuses() -> Vec<String> {
    ENTITLING_STATUSES.iter().map(|status| status.as_str().to_string()).collect()
  }
}

#[async_trait]
impl EntitlementStore for PgEntitlementStore {
  async fn has_qualifying_order(&self, user_id: Uuid, product_id: Uuid) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
      "SELECT EXISTS ( \
         SELECT 1 \
         FROM orders o \
         JOIN order_items i ON i.order_id = o.id \
         WHERE o.user_id = $1 \
           AND i.product_id = $2 \
           AND o.status::text = ANY($3) \
       )",
    )
    .bind(user_id)
    .bind(product_id)
    .bind(Self::entitling_statuses())
    .fetch_one(&self.pool)
    .await?;
    Ok(exists)
  }

  async fn purchased_product_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>> {
    let product_ids: Vec<Uuid> = sqlx::query_scalar(
      "SELECT i.product_id \
       FROM orders o \
       JOIN order_items i ON i.order_id = o.id \
       WHERE o.user_id = $1 \
         AND o.status::text = ANY($2) \
       GROUP BY i.product_id \
       ORDER BY MAX(o.ordered_at) DESC",
    )
    .bind(user_id)
    .bind(Self::entitling_statuses())
    .fetch_all(&self.pool)
    .await?;
    Ok(product_ids)
  }
}
