// src/web/handlers/access_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::access_service::{self, DenialReason};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

/// `GET /api/v1/books/{book_id}/access`
///
/// Surfaces the access evaluator as a structured decision. Denials are
/// regular responses here, not thrown errors; only store failures go
/// through `AppError`.
#[instrument(
  name = "handler::book_access",
  skip(app_state, path, auth_user),
  fields(user_id = %auth_user.user_id, book_id = %path.as_ref())
)]
pub async fn book_access_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let book_id = path.into_inner();

  let decision = access_service::evaluate(
    app_state.catalog.as_ref(),
    app_state.entitlements.as_ref(),
    auth_user.user_id,
    book_id,
  )
  .await?;

  info!(has_access = decision.has_access, "Access check completed.");

  Ok(match decision.reason {
    None => HttpResponse::Ok().json(json!({
      "hasAccess": true,
      "book": decision.book,
    })),
    Some(DenialReason::NotEntitled) => HttpResponse::Forbidden().json(json!({
      "hasAccess": false,
      "message": "Purchase required to access this book",
    })),
    Some(DenialReason::BookNotFound) => HttpResponse::NotFound().json(json!({
      "message": "Book not found",
    })),
  })
}
