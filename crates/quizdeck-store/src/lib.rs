//! quizdeck-store — `QuestionnaireStore` implementations.
//!
//! [`MemoryStore`] keeps everything in-process; [`JsonStore`] persists
//! to a single JSON file with atomic replace-on-write.

pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;
