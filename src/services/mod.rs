//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `catalog.rs` — in-memory book collection: add/remove/search/stats.
//! - `storage.rs` — library file load/save.
//! - `output.rs` — text line formats and JSON output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod catalog;
pub mod output;
pub mod storage;
