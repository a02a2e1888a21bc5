// src/reader.rs

//! Reader surface: drives an access check and content resolution into the
//! terminal state the client renders. The implicit initial state is the
//! in-flight request itself; every state returned here is terminal until
//! the user navigates away.

use crate::models::BookView;
use crate::services::access_service::{self, DenialReason};
use crate::services::content_service::{self, PresentationPlan};
use crate::stores::{CatalogStore, EntitlementStore};
use serde::Serialize;
use tracing::{instrument, warn};
use uuid::Uuid;

const PURCHASE_REQUIRED: &str = "You need to purchase this book to read it.";
const BOOK_NOT_FOUND: &str = "Book not found.";
const NO_CONTENT: &str = "This book has no digital content available.";
const CONTENT_UNAVAILABLE: &str = "This content is currently unavailable.";
const LOAD_FAILED: &str = "Failed to load book. Please try again.";

/// What the reader page shows once loading settles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ReaderState {
  /// The caller holds no qualifying order for this book.
  Denied { message: String },
  /// Entitled, but there is nothing to read.
  NoContentAvailable { message: String },
  /// Entitled and resolvable: render the plan's viewer variant.
  Ready { book: BookView, plan: PresentationPlan },
  /// The book is unknown or a store read failed. No automatic retry here;
  /// the retry affordance belongs to the UI layer.
  Error { message: String },
}

/// Runs the full open-book flow: evaluate entitlement, then resolve the
/// content into a presentation plan.
#[instrument(name = "reader::open", skip(catalog, entitlements))]
pub async fn open(
  catalog: &dyn CatalogStore,
  entitlements: &dyn EntitlementStore,
  user_id: Uuid,
  book_id: Uuid,
) -> ReaderState {
  let decision = match access_service::evaluate(catalog, entitlements, user_id, book_id).await {
    Ok(decision) => decision,
    Err(error) => {
      warn!(error = %error, "Store read failed while opening the reader");
      return ReaderState::Error {
        message: LOAD_FAILED.to_string(),
      };
    }
  };

  let book = match (decision.reason, decision.book) {
    (Some(DenialReason::BookNotFound), _) => {
      return ReaderState::Error {
        message: BOOK_NOT_FOUND.to_string(),
      }
    }
    (Some(DenialReason::NotEntitled), _) | (None, None) => {
      return ReaderState::Denied {
        message: PURCHASE_REQUIRED.to_string(),
      }
    }
    (None, Some(book)) => book,
  };

  match content_service::resolve(&book) {
    Ok(PresentationPlan::NoContent) => ReaderState::NoContentAvailable {
      message: NO_CONTENT.to_string(),
    },
    Ok(plan) => ReaderState::Ready { book, plan },
    Err(error) => {
      // Catalog data inconsistent with its declared content type. Details
      // stay in the logs; the client gets a generic message.
      warn!(error = %error, book_id = %book_id, "Digital content descriptor is malformed");
      ReaderState::NoContentAvailable {
        message: CONTENT_UNAVAILABLE.to_string(),
      }
    }
  }
}
