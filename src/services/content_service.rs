// src/services/content_service.rs

use crate::errors::{AppError, Result};
use crate::models::{BookView, ContentType, DigitalContent};
use serde::Serialize;

/// Resolved instruction for how the reader should present a book's digital
/// content. Clients embed `InlineFrame` targets, save `DownloadLink`
/// targets, and open `ExternalRedirect` targets in a new browsing context
/// rather than embedding them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PresentationPlan {
  /// The book carries no digital content to deliver.
  NoContent,
  /// Render the document in an embedded frame.
  InlineFrame { url: String },
  /// Offer the file as a download.
  DownloadLink { url: String, suggested_name: String },
  /// Send the reader to an external location.
  ExternalRedirect { url: String, description: String },
}

/// Maps an entitled book's digital content descriptor onto a presentation
/// plan. Pure function of its input: authorization already happened
/// upstream and is not re-derived here.
///
/// `Err` means the catalog record is inconsistent with its declared
/// content type; callers degrade to a content-unavailable presentation.
pub fn resolve(book: &BookView) -> Result<PresentationPlan> {
  let content = match &book.digital_content {
    Some(content) if content.has_content => content,
    _ => return Ok(PresentationPlan::NoContent),
  };

  // Only the locator selected by content_type is consulted; the other
  // locator fields are ignored even if populated.
  let plan = match content.content_type {
    ContentType::Pdf | ContentType::Txt => PresentationPlan::InlineFrame {
      url: require_locator(&content.content_url, "contentUrl", book)?,
    },
    kind @ (ContentType::Doc | ContentType::Docx | ContentType::Epub) => PresentationPlan::DownloadLink {
      url: require_locator(&content.content_url, "contentUrl", book)?,
      suggested_name: suggested_file_name(book, content, kind),
    },
    ContentType::Link | ContentType::External => PresentationPlan::ExternalRedirect {
      url: require_locator(&content.external_link, "externalLink", book)?,
      description: content
        .link_description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or("External resource")
        .to_string(),
    },
    ContentType::Doi => PresentationPlan::ExternalRedirect {
      url: format!("https://doi.org/{}", require_locator(&content.doi_number, "doiNumber", book)?),
      description: "Academic paper".to_string(),
    },
  };
  Ok(plan)
}

/// Download name shown to the user: the stored file name when present,
/// otherwise the title with the content type's extension.
fn suggested_file_name(book: &BookView, content: &DigitalContent, kind: ContentType) -> String {
  if let Some(name) = content.file_name.as_deref().map(str::trim).filter(|name| !name.is_empty()) {
    return name.to_string();
  }
  match kind.file_extension() {
    Some(extension) => format!("{}.{}", book.title, extension),
    None => book.title.clone(),
  }
}

// The error text stays internal; the HTTP layer replaces it with a generic
// content-unavailable message.
fn require_locator(value: &Option<String>, field: &str, book: &BookView) -> Result<String> {
  match value.as_deref().map(str::trim) {
    Some(value) if !value.is_empty() => Ok(value.to_string()),
    _ => Err(AppError::MalformedContent(format!(
      "book {} declares a content type whose {} is missing or empty",
      book.id, field
    ))),
  }
}
