// src/stores/catalog.rs

use crate::errors::Result;
use crate::models::{AgeRange, Book, DigitalContent, NewBook, TargetAudience};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Read/write window onto the book catalog. Reads serve the access and
/// reader flows; writes happen only through the admin API.
#[async_trait]
pub trait CatalogStore: Send + Sync {
  async fn find_book(&self, book_id: Uuid) -> Result<Option<Book>>;

  /// Fetch several books at once. Order of the result is unspecified;
  /// callers that care reorder by id.
  async fn find_books_by_ids(&self, book_ids: &[Uuid]) -> Result<Vec<Book>>;

  async fn insert_book(&self, book: NewBook) -> Result<Book>;

  /// Returns `None` when no such book exists.
  async fn update_book(&self, book_id: Uuid, book: NewBook) -> Result<Option<Book>>;

  /// Returns `false` when no such book exists.
  async fn delete_book(&self, book_id: Uuid) -> Result<bool>;
}

pub struct PgCatalogStore {
  pool: PgPool,
}

impl PgCatalogStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Row shape of the `books` table. The digital content descriptor lives in
/// a `jsonb` column and the age range in two flat integer columns.
#[derive(FromRow)]
struct BookRow {
  id: Uuid,
  title: String,
  author: String,
  description: String,
  price_cents: i32,
  is_free: bool,
  cover_image: Option<String>,
  category: String,
  language: String,
  page_count: Option<i32>,
  published_date: Option<NaiveDate>,
  isbn: Option<String>,
  publisher: Option<String>,
  target_audience: TargetAudience,
  age_min: Option<i32>,
  age_max: Option<i32>,
  digital_content: Option<Json<DigitalContent>>,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
  fn from(row: BookRow) -> Self {
    let age_range = match (row.age_min, row.age_max) {
      (Some(min), Some(max)) => Some(AgeRange { min, max }),
      _ => None,
    };
    Book {
      id: row.id,
      title: row.title,
      author: row.author,
      description: row.description,
      price_cents: row.price_cents,
      is_free: row.is_free,
      cover_image: row.cover_image,
      category: row.category,
      language: row.language,
      page_count: row.page_count,
      published_date: row.published_date,
      isbn: row.isbn,
      publisher: row.publisher,
      target_audience: row.target_audience,
      age_range,
      digital_content: row.digital_content.map(|Json(content)| content),
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

const BOOK_COLUMNS: &str = "id, title, author, description, price_cents, is_free, cover_image, category, \
   language, page_count, published_date, isbn, publisher, target_audience, age_min, age_max, \
   digital_content, created_at, updated_at";

#[async_trait]
impl CatalogStore for PgCatalogStore {
  async fn find_book(&self, book_id: Uuid) -> Result<Option<Book>> {
    let sql = format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1");
    let row: Option<BookRow> = sqlx::query_as(&sql).bind(book_id).fetch_optional(&self.pool).await?;
    Ok(row.map(Book::from))
  }

  async fn find_books_by_ids(&self, book_ids: &[Uuid]) -> Result<Vec<Book>> {
    if book_ids.is_empty() {
      return Ok(Vec::new());
    }
    let sql = format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ANY($1)");
    let rows: Vec<BookRow> = sqlx::query_as(&sql).bind(book_ids).fetch_all(&self.pool).await?;
    Ok(rows.into_iter().map(Book::from).collect())
  }

  async fn insert_book(&self, book: NewBook) -> Result<Book> {
    let sql = format!(
      "INSERT INTO books (title, author, description, price_cents, is_free, cover_image, category, \
         language, page_count, published_date, isbn, publisher, target_audience, age_min, age_max, \
         digital_content) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
       RETURNING {BOOK_COLUMNS}"
    );
    let row: BookRow = sqlx::query_as(&sql)
      .bind(&book.title)
      .bind(&book.author)
      .bind(&book.description)
      .bind(book.price_cents)
      .bind(book.is_free)
      .bind(&book.cover_image)
      .bind(&book.category)
      .bind(&book.language)
      .bind(book.page_count)
      .bind(book.published_date)
      .bind(&book.isbn)
      .bind(&book.publisher)
      .bind(book.target_audience)
      .bind(book.age_range.map(|range| range.min))
      .bind(book.age_range.map(|range| range.max))
      .bind(book.digital_content.as_ref().map(Json))
      .fetch_one(&self.pool)
      .await?;
    Ok(Book::from(row))
  }

  async fn update_book(&self, book_id: Uuid, book: NewBook) -> Result<Option<Book>> {
    let sql = format!(
      "UPDATE books SET title = $1, author = $2, description = $3, price_cents = $4, is_free = $5, \
         cover_image = $6, category = $7, language = $8, page_count = $9, published_date = $10, \
         isbn = $11, publisher = $12, target_audience = $13, age_min = $14, age_max = $15, \
         digital_content = $16, updated_at = NOW() \
       WHERE id = $17 \
       RETURNING {BOOK_COLUMNS}"
    );
    let row: Option<BookRow> = sqlx::query_as(&sql)
      .bind(&book.title)
      .bind(&book.author)
      .bind(&book.description)
      .bind(book.price_cents)
      .bind(book.is_free)
      .bind(&book.cover_image)
      .bind(&book.category)
      .bind(&book.language)
      .bind(book.page_count)
      .bind(book.published_date)
      .bind(&book.isbn)
      .bind(&book.publisher)
      .bind(book.target_audience)
      .bind(book.age_range.map(|range| range.min))
      .bind(book.age_range.map(|range| range.max))
      .bind(book.digital_content.as_ref().map(Json))
      .bind(book_id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(row.map(Book::from))
  }

  async fn delete_book(&self, book_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM books WHERE id = $1")
      .bind(book_id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }
}
