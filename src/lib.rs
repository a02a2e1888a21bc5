// src/lib.rs

//! Book marketplace backend: purchase-gated access to digital book
//! content, delivery planning for the reader page, and the admin catalog
//! API. Orders are written by the external checkout and fulfillment
//! services and only read here.

pub mod config;
pub mod errors;
pub mod models;
pub mod reader;
pub mod services;
pub mod state;
pub mod stores;
pub mod web;
