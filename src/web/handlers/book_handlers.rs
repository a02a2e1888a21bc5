// src/web/handlers/book_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ContentType, NewBook, TargetAudience};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

/// `GET /api/v1/books/{book_id}`
///
/// Public metadata for a single catalog entry, as fetched by the admin
/// update form. Listing and search stay with the external catalog surface.
#[instrument(name = "handler::get_book", skip(app_state, path), fields(book_id = %path.as_ref()))]
pub async fn get_book_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
  let book_id = path.into_inner();

  match app_state.catalog.find_book(book_id).await? {
    Some(book) => Ok(HttpResponse::Ok().json(json!({ "book": book }))),
    None => {
      warn!("Book {} not found.", book_id);
      Err(AppError::NotFound(format!("Book with ID {} not found.", book_id)))
    }
  }
}

/// `POST /api/v1/books` (admin)
#[instrument(
  name = "handler::create_book",
  skip(app_state, payload, auth_user),
  fields(user_id = %auth_user.user_id)
)]
pub async fn create_book_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewBook>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  require_admin(&app_state, auth_user.user_id).await?;

  let payload = payload.into_inner();
  validate_new_book(&payload)?;

  let book = app_state.catalog.insert_book(payload).await?;
  info!(book_id = %book.id, "Book created.");

  Ok(HttpResponse::Created().json(json!({ "book": book })))
}

/// `PUT /api/v1/books/{book_id}` (admin)
#[instrument(
  name = "handler::update_book",
  skip(app_state, path, payload, auth_user),
  fields(user_id = %auth_user.user_id, book_id = %path.as_ref())
)]
pub async fn update_book_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  payload: web::Json<NewBook>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  require_admin(&app_state, auth_user.user_id).await?;

  let book_id = path.into_inner();
  let payload = payload.into_inner();
  validate_new_book(&payload)?;

  match app_state.catalog.update_book(book_id, payload).await? {
    Some(book) => {
      info!("Book updated.");
      Ok(HttpResponse::Ok().json(json!({ "book": book })))
    }
    None => Err(AppError::NotFound(format!("Book with ID {} not found.", book_id))),
  }
}

/// `DELETE /api/v1/books/{book_id}` (admin)
#[instrument(
  name = "handler::delete_book",
  skip(app_state, path, auth_user),
  fields(user_id = %auth_user.user_id, book_id = %path.as_ref())
)]
pub async fn delete_book_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  require_admin(&app_state, auth_user.user_id).await?;

  let book_id = path.into_inner();
  if app_state.catalog.delete_book(book_id).await? {
    info!("Book deleted.");
    Ok(HttpResponse::NoContent().finish())
  } else {
    Err(AppError::NotFound(format!("Book with ID {} not found.", book_id)))
  }
}

// Catalog writes are reserved for administrators. An unknown principal
// gets the same response as a known non-admin.
async fn require_admin(app_state: &AppState, user_id: Uuid) -> Result<(), AppError> {
  match app_state.users.find_user(user_id).await? {
    Some(user) if user.is_admin => Ok(()),
    _ => {
      warn!(user_id = %user_id, "Rejected catalog write by non-admin principal.");
      Err(AppError::Forbidden("Administrator access required.".to_string()))
    }
  }
}

/// Server-side mirror of the admin form's rules: required descriptive
/// fields, price unless free, age range for kids books, and the locator
/// matching the declared content type.
fn validate_new_book(book: &NewBook) -> Result<(), AppError> {
  fn required(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
      return Err(AppError::Validation(format!("{} is required.", field)));
    }
    Ok(())
  }

  required(&book.title, "Title")?;
  required(&book.author, "Author")?;
  required(&book.description, "Description")?;
  required(&book.category, "Category")?;

  if !book.is_free && book.price_cents <= 0 {
    return Err(AppError::Validation("Price is required for paid books.".to_string()));
  }

  match (book.target_audience, &book.age_range) {
    (TargetAudience::Kids, None) => {
      return Err(AppError::Validation("Age range is required for kids books.".to_string()));
    }
    (TargetAudience::Kids, Some(range)) => {
      if range.min < 0 || range.min > range.max || range.max > 18 {
        return Err(AppError::Validation(
          "Age range must lie between 0 and 18 with min not above max.".to_string(),
        ));
      }
    }
    (_, Some(_)) => {
      return Err(AppError::Validation("Age range applies to kids books only.".to_string()));
    }
    (_, None) => {}
  }

  if let Some(content) = &book.digital_content {
    if content.has_content {
      let (label, locator) = match content.content_type {
        ContentType::Pdf | ContentType::Doc | ContentType::Docx | ContentType::Epub | ContentType::Txt => {
          ("Content URL", &content.content_url)
        }
        ContentType::Doi => ("DOI number", &content.doi_number),
        ContentType::Link | ContentType::External => ("External link", &content.external_link),
      };
      if locator.as_deref().map(str::trim).map_or(true, str::is_empty) {
        return Err(AppError::Validation(format!(
          "{} is required for the selected content type.",
          label
        )));
      }
    }
  }

  Ok(())
}
