// src/models/mod.rs

//! Contains data structures representing database entities.

// Declare child modules for each model
pub mod book;
pub mod order;
pub mod order_item;
pub mod user;

// Re-export the model structs for convenient access
pub use book::{AgeRange, Book, BookView, ContentType, DigitalContent, NewBook, TargetAudience};
pub use order::{Order, OrderStatus, ENTITLING_STATUSES};
pub use order_item::OrderItem;
pub use user::User;
