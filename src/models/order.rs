// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType};
use uuid::Uuid;

/// Fulfillment state of an order. Progresses forward only, and is mutated
/// exclusively by the external checkout/fulfillment services; this
/// application treats it as read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "order_status_enum", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Paid,
  Confirmed,
  Sent,
  Delivered,
  Cancelled,
}

/// Statuses that confer entitlement to a purchased book's digital content:
/// payment has been taken, whatever the later fulfillment progress.
pub const ENTITLING_STATUSES: [OrderStatus; 4] = [
  OrderStatus::Paid,
  OrderStatus::Confirmed,
  OrderStatus::Sent,
  OrderStatus::Delivered,
];

impl OrderStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Paid => "paid",
      OrderStatus::Confirmed => "confirmed",
      OrderStatus::Sent => "sent",
      OrderStatus::Delivered => "delivered",
      OrderStatus::Cancelled => "cancelled",
    }
  }

  pub fn confers_entitlement(self) -> bool {
    ENTITLING_STATUSES.contains(&self)
  }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  pub status: OrderStatus,
  pub total_cents: i32,
  pub currency: String,
  pub ordered_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
