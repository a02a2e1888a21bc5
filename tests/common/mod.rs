// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper.

use async_trait::async_trait;
use bookmarket::errors::{AppError, Result};
use bookmarket::models::{
  Book, ContentType, DigitalContent, NewBook, Order, OrderItem, OrderStatus, TargetAudience, User,
};
use bookmarket::stores::{CatalogStore, EntitlementStore, UserStore};
use chrono::Utc;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::Level;
use uuid::Uuid;

// --- Tracing setup (idempotent across test binaries) ---

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- In-memory store doubles ---

/// Order history double holding the same shapes the real tables do.
/// Seeding order matters: later seeds count as more recent orders,
/// mirroring the newest-first Postgres queries.
#[derive(Default)]
pub struct InMemoryEntitlementStore {
  orders: Mutex<Vec<(Order, Vec<OrderItem>)>>,
}

impl InMemoryEntitlementStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn seed_order(&self, user_id: Uuid, status: OrderStatus, product_ids: &[Uuid]) {
    let now = Utc::now();
    let order = Order {
      id: Uuid::new_v4(),
      user_id,
      status,
      total_cents: 1999 * product_ids.len() as i32,
      currency: "USD".to_string(),
      ordered_at: now,
      updated_at: now,
    };
    let items = product_ids
      .iter()
      .map(|&product_id| OrderItem {
        id: Uuid::new_v4(),
        order_id: order.id,
        product_id,
        name: "Seeded item".to_string(),
        quantity: 1,
      })
      .collect();
    self.orders.lock().unwrap().push((order, items));
  }

  /// Stand-in for the external fulfillment service advancing (or
  /// cancelling) every order of a user.
  pub fn set_status_for(&self, user_id: Uuid, status: OrderStatus) {
    for (order, _) in self.orders.lock().unwrap().iter_mut() {
      if order.user_id == user_id {
        order.status = status;
      }
    }
  }
}

#[async_trait]
impl EntitlementStore for InMemoryEntitlementStore {
  async fn has_qualifying_order(&self, user_id: Uuid, product_id: Uuid) -> Result<bool> {
    let orders = self.orders.lock().unwrap();
    Ok(orders.iter().any(|(order, items)| {
      order.user_id == user_id
        && order.status.confers_entitlement()
        && items.iter().any(|item| item.product_id == product_id)
    }))
  }

  async fn purchased_product_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>> {
    let orders = self.orders.lock().unwrap();
    let mut seen: Vec<Uuid> = Vec::new();
    for (order, items) in orders.iter().rev() {
      if order.user_id != user_id || !order.status.confers_entitlement() {
        continue;
      }
      for item in items {
        if !seen.contains(&item.product_id) {
          seen.push(item.product_id);
        }
      }
    }
    Ok(seen)
  }
}

#[derive(Default)]
pub struct InMemoryCatalogStore {
  books: Mutex<HashMap<Uuid, Book>>,
}

impl InMemoryCatalogStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn seed_book(&self, book: Book) {
    self.books.lock().unwrap().insert(book.id, book);
  }
}

fn materialize(id: Uuid, new: NewBook) -> Book {
  let now = Utc::now();
  Book {
    id,
    title: new.title,
    author: new.author,
    description: new.description,
    price_cents: new.price_cents,
    is_free: new.is_free,
    cover_image: new.cover_image,
    category: new.category,
    language: new.language,
    page_count: new.page_count,
    published_date: new.published_date,
    isbn: new.isbn,
    publisher: new.publisher,
    target_audience: new.target_audience,
    age_range: new.age_range,
    digital_content: new.digital_content,
    created_at: now,
    updated_at: now,
  }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
  async fn find_book(&self, book_id: Uuid) -> Result<Option<Book>> {
    Ok(self.books.lock().unwrap().get(&book_id).cloned())
  }

  async fn find_books_by_ids(&self, book_ids: &[Uuid]) -> Result<Vec<Book>> {
    let books = self.books.lock().unwrap();
    Ok(book_ids.iter().filter_map(|id| books.get(id).cloned()).collect())
  }

  async fn insert_book(&self, book: NewBook) -> Result<Book> {
    let book = materialize(Uuid::new_v4(), book);
    self.books.lock().unwrap().insert(book.id, book.clone());
    Ok(book)
  }

  async fn update_book(&self, book_id: Uuid, book: NewBook) -> Result<Option<Book>> {
    let mut books = self.books.lock().unwrap();
    if !books.contains_key(&book_id) {
      return Ok(None);
    }
    let book = materialize(book_id, book);
    books.insert(book_id, book.clone());
    Ok(Some(book))
  }

  async fn delete_book(&self, book_id: Uuid) -> Result<bool> {
    Ok(self.books.lock().unwrap().remove(&book_id).is_some())
  }
}

#[derive(Default)]
pub struct InMemoryUserStore {
  users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn seed_user(&self, user: User) {
    self.users.lock().unwrap().insert(user.id, user);
  }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
  async fn find_user(&self, user_id: Uuid) -> Result<Option<User>> {
    Ok(self.users.lock().unwrap().get(&user_id).cloned())
  }
}

/// Catalog double whose every read fails, for exercising the transient
/// failure paths.
pub struct FailingCatalogStore;

#[async_trait]
impl CatalogStore for FailingCatalogStore {
  async fn find_book(&self, _book_id: Uuid) -> Result<Option<Book>> {
    Err(AppError::Database(sqlx::Error::PoolClosed))
  }

  async fn find_books_by_ids(&self, _book_ids: &[Uuid]) -> Result<Vec<Book>> {
    Err(AppError::Database(sqlx::Error::PoolClosed))
  }

  async fn insert_book(&self, _book: NewBook) -> Result<Book> {
    Err(AppError::Database(sqlx::Error::PoolClosed))
  }

  async fn update_book(&self, _book_id: Uuid, _book: NewBook) -> Result<Option<Book>> {
    Err(AppError::Database(sqlx::Error::PoolClosed))
  }

  async fn delete_book(&self, _book_id: Uuid) -> Result<bool> {
    Err(AppError::Database(sqlx::Error::PoolClosed))
  }
}

// --- Fixtures ---

pub fn fixture_book(title: &str, digital_content: Option<DigitalContent>) -> Book {
  let now = Utc::now();
  Book {
    id: Uuid::new_v4(),
    title: title.to_string(),
    author: "Jane Tester".to_string(),
    description: "A book used in tests.".to_string(),
    price_cents: 1999,
    is_free: false,
    cover_image: None,
    category: "Fiction".to_string(),
    language: "English".to_string(),
    page_count: Some(320),
    published_date: None,
    isbn: Some("978-3-16-148410-0".to_string()),
    publisher: None,
    target_audience: TargetAudience::Adults,
    age_range: None,
    digital_content,
    created_at: now,
    updated_at: now,
  }
}

pub fn fixture_user(is_admin: bool) -> User {
  let now = Utc::now();
  User {
    id: Uuid::new_v4(),
    name: "Jane Tester".to_string(),
    email: "jane@example.com".to_string(),
    username: "jane".to_string(),
    is_admin,
    created_at: now,
    updated_at: now,
  }
}

pub fn fixture_new_book(title: &str) -> NewBook {
  NewBook {
    title: title.to_string(),
    author: "Jane Tester".to_string(),
    description: "A book used in tests.".to_string(),
    price_cents: 1999,
    is_free: false,
    cover_image: None,
    category: "Fiction".to_string(),
    language: "English".to_string(),
    page_count: None,
    published_date: None,
    isbn: None,
    publisher: None,
    target_audience: TargetAudience::Adults,
    age_range: None,
    digital_content: None,
  }
}

/// Descriptor with `has_content = true` and everything else unset; tests
/// fill in the fields they care about.
pub fn content_of_type(content_type: ContentType) -> DigitalContent {
  DigitalContent {
    has_content: true,
    content_type,
    content_url: None,
    file_name: None,
    file_size: None,
    doi_number: None,
    external_link: None,
    link_description: None,
  }
}

pub fn pdf_content(url: &str) -> DigitalContent {
  DigitalContent {
    content_url: Some(url.to_string()),
    ..content_of_type(ContentType::Pdf)
  }
}

pub fn link_content(url: &str, description: Option<&str>) -> DigitalContent {
  DigitalContent {
    external_link: Some(url.to_string()),
    link_description: description.map(str::to_string),
    ..content_of_type(ContentType::Link)
  }
}

pub fn doi_content(number: &str) -> DigitalContent {
  DigitalContent {
    doi_number: Some(number.to_string()),
    ..content_of_type(ContentType::Doi)
  }
}
