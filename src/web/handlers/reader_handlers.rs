// src/web/handlers/reader_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::reader;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

/// `GET /api/v1/books/{book_id}/reader`
///
/// Runs the full open-book flow and returns the terminal reader state for
/// the client to render. Always `200`: denial, missing content, and load
/// failures are states of the reader, not HTTP errors.
#[instrument(
  name = "handler::open_reader",
  skip(app_state, path, auth_user),
  fields(user_id = %auth_user.user_id, book_id = %path.as_ref())
)]
pub async fn open_reader_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let book_id = path.into_inner();

  let state = reader::open(
    app_state.catalog.as_ref(),
    app_state.entitlements.as_ref(),
    auth_user.user_id,
    book_id,
  )
  .await;

  Ok(HttpResponse::Ok().json(state))
}
