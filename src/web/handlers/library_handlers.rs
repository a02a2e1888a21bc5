// src/web/handlers/library_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use std::collections::HashMap;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Book;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

/// `GET /api/v1/library`
///
/// Distinct purchased books across the caller's entitling orders, most
/// recent purchase first. A user with no purchases gets an empty list.
#[instrument(name = "handler::get_library", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_library_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let product_ids = app_state.entitlements.purchased_product_ids(auth_user.user_id).await?;
  let books = app_state.catalog.find_books_by_ids(&product_ids).await?;

  // Restore purchase order; ids whose book has left the catalog drop out.
  let mut by_id: HashMap<Uuid, Book> = books.into_iter().map(|book| (book.id, book)).collect();
  let books: Vec<Book> = product_ids.iter().filter_map(|id| by_id.remove(id)).collect();

  info!(count = books.len(), "Library fetched.");

  Ok(HttpResponse::Ok().json(json!({ "books": books })))
}
