// src/models/book.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type as SqlxType;
use uuid::Uuid;

/// How a book's digital content is delivered.
///
/// Every consumer matches on this exhaustively, so a new delivery channel
/// cannot be added without every call site handling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
  Pdf,
  Doc,
  Docx,
  Epub,
  Txt,
  Link,
  Doi,
  External,
}

impl ContentType {
  /// File extension for the file-backed delivery channels, used to build a
  /// fallback download name. Link-style channels carry no file.
  pub fn file_extension(self) -> Option<&'static str> {
    match self {
      ContentType::Pdf => Some("pdf"),
      ContentType::Doc => Some("doc"),
      ContentType::Docx => Some("docx"),
      ContentType::Epub => Some("epub"),
      ContentType::Txt => Some("txt"),
      ContentType::Link | ContentType::Doi | ContentType::External => None,
    }
  }
}

/// Per-book metadata describing whether and how digital content can be
/// delivered.
///
/// Exactly one locator field (`content_url`, `doi_number`, `external_link`)
/// is authoritative, selected by `content_type`; the others are ignored
/// during resolution even if populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalContent {
  pub has_content: bool,
  pub content_type: ContentType,
  #[serde(default)]
  pub content_url: Option<String>,
  #[serde(default)]
  pub file_name: Option<String>,
  #[serde(default)]
  pub file_size: Option<i64>,
  #[serde(default)]
  pub doi_number: Option<String>,
  #[serde(default)]
  pub external_link: Option<String>,
  #[serde(default)]
  pub link_description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "target_audience_enum", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TargetAudience {
  Kids,
  Adults,
  HigherEducation,
}

/// Age bracket for kids books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
  pub min: i32,
  pub max: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
  pub id: Uuid,
  pub title: String,
  pub author: String,
  pub description: String,
  pub price_cents: i32,
  pub is_free: bool,
  pub cover_image: Option<String>,
  pub category: String,
  pub language: String,
  pub page_count: Option<i32>,
  pub published_date: Option<NaiveDate>,
  pub isbn: Option<String>,
  pub publisher: Option<String>,
  pub target_audience: TargetAudience,
  pub age_range: Option<AgeRange>,
  pub digital_content: Option<DigitalContent>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Book {
  /// Redacted projection handed to an entitled caller: identity and
  /// descriptive fields plus the digital content descriptor. Commercial
  /// internals and order data never appear here.
  pub fn to_view(&self) -> BookView {
    BookView {
      id: self.id,
      title: self.title.clone(),
      author: self.author.clone(),
      description: self.description.clone(),
      category: self.category.clone(),
      language: self.language.clone(),
      page_count: self.page_count,
      published_date: self.published_date,
      isbn: self.isbn.clone(),
      digital_content: self.digital_content.clone(),
    }
  }
}

/// What an entitled reader is allowed to see of a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
  pub id: Uuid,
  pub title: String,
  pub author: String,
  pub description: String,
  pub category: String,
  pub language: String,
  pub page_count: Option<i32>,
  pub published_date: Option<NaiveDate>,
  pub isbn: Option<String>,
  pub digital_content: Option<DigitalContent>,
}

fn default_language() -> String {
  "English".to_string()
}

/// Catalog entry payload for the admin create/update operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
  pub title: String,
  pub author: String,
  pub description: String,
  #[serde(default)]
  pub price_cents: i32,
  #[serde(default)]
  pub is_free: bool,
  #[serde(default)]
  pub cover_image: Option<String>,
  pub category: String,
  #[serde(default = "default_language")]
  pub language: String,
  #[serde(default)]
  pub page_count: Option<i32>,
  #[serde(default)]
  pub published_date: Option<NaiveDate>,
  #[serde(default)]
  pub isbn: Option<String>,
  #[serde(default)]
  pub publisher: Option<String>,
  pub target_audience: TargetAudience,
  #[serde(default)]
  pub age_range: Option<AgeRange>,
  #[serde(default)]
  pub digital_content: Option<DigitalContent>,
}
