// src/services/mod.rs

//! Domain logic: the access evaluator and the content resolver.

pub mod access_service;
pub mod content_service;

pub use access_service::{AccessDecision, DenialReason};
pub use content_service::PresentationPlan;
