// src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

/// `GET /api/v1/auth/me`
///
/// Profile of the authenticated principal. Sign-in and token issuance live
/// in the external auth service; this only reflects the stored profile.
#[instrument(name = "handler::me", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn me_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  match app_state.users.find_user(auth_user.user_id).await? {
    Some(user) => Ok(HttpResponse::Ok().json(json!({ "user": user }))),
    None => Err(AppError::NotFound("User not found.".to_string())),
  }
}
