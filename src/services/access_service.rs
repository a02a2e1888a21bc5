// src/services/access_service.rs

use crate::errors::Result;
use crate::models::BookView;
use crate::stores::{CatalogStore, EntitlementStore};
use futures_util::future::try_join;
use serde::Serialize;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Why an access request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DenialReason {
  BookNotFound,
  NotEntitled,
}

/// Outcome of an entitlement check. Derived fresh per request and never
/// persisted; a denial is data here, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
  pub has_access: bool,
  pub book: Option<BookView>,
  pub reason: Option<DenialReason>,
}

impl AccessDecision {
  fn granted(book: BookView) -> Self {
    Self {
      has_access: true,
      book: Some(book),
      reason: None,
    }
  }

  fn denied(reason: DenialReason) -> Self {
    Self {
      has_access: false,
      book: None,
      reason: Some(reason),
    }
  }
}

/// Decides whether `user_id` may open the digital content of `book_id`.
///
/// Both stores are re-read on every call, so a later order cancellation is
/// reflected on the very next check; nothing is cached and nothing is
/// mutated. A grant says nothing about whether the book actually carries
/// digital content: that is judged afterwards by the content resolver.
///
/// `Err` is reserved for store failures; every negative outcome of the
/// check itself comes back as a denial inside `Ok`.
#[instrument(name = "access::evaluate", skip(catalog, entitlements))]
pub async fn evaluate(
  catalog: &dyn CatalogStore,
  entitlements: &dyn EntitlementStore,
  user_id: Uuid,
  book_id: Uuid,
) -> Result<AccessDecision> {
  // Independent reads; both must land before a decision is produced.
  let (book, entitled) = try_join(
    catalog.find_book(book_id),
    entitlements.has_qualifying_order(user_id, book_id),
  )
  .await?;

  let decision = match book {
    None => AccessDecision::denied(DenialReason::BookNotFound),
    Some(_) if !entitled => AccessDecision::denied(DenialReason::NotEntitled),
    Some(book) => AccessDecision::granted(book.to_view()),
  };

  debug!(
    has_access = decision.has_access,
    reason = ?decision.reason,
    "Access decision computed"
  );
  Ok(decision)
}
