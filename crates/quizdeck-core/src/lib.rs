//! quizdeck-core — Questionnaire model, validation, scoring, and lifecycle.
//!
//! This crate defines the data model, the store trait, and the
//! validation and scoring logic that the rest of quizdeck builds on.

pub mod error;
pub mod model;
pub mod parser;
pub mod score;
pub mod service;
pub mod store;
pub mod validate;
