// src/stores/users.rs

use crate::errors::Result;
use crate::models::User;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Profile lookup. Credentials and sessions belong to the external auth
/// service; only the profile and the admin flag are read here.
#[async_trait]
pub trait UserStore: Send + Sync {
  async fn find_user(&self, user_id: Uuid) -> Result<Option<User>>;
}

pub struct PgUserStore {
  pool: PgPool,
}

impl PgUserStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserStore for PgUserStore {
  async fn find_user(&self, user_id: Uuid) -> Result<Option<User>> {
    let user: Option<User> =
      sqlx::query_as("SELECT id, name, email, username, is_admin, created_at, updated_at FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
    Ok(user)
  }
}
