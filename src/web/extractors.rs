// src/web/extractors.rs

use crate::errors::AppError;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;
use uuid::Uuid;

/// Principal established by the external auth collaborator, which
/// validates the session and injects the `X-User-ID` header before the
/// request reaches this application. Requests arriving without it are
/// rejected before any domain logic runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
  pub user_id: Uuid,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let user_id = req
      .headers()
      .get("X-User-ID")
      .and_then(|value| value.to_str().ok())
      .and_then(|value| Uuid::parse_str(value).ok());

    match user_id {
      Some(user_id) => ready(Ok(AuthenticatedUser { user_id })),
      None => {
        warn!("Missing or invalid X-User-ID header on a protected route.");
        ready(Err(AppError::Auth("User authentication required.".to_string())))
      }
    }
  }
}
