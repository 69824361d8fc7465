//! Shared data model layer (structs/constants/errors only).
//!
//! ## Files
//! - `models.rs` — book record, statistics, JSON output envelopes.
//! - `constants.rs` — default file name and other stable constants.
//! - `errors.rs` — typed errors raised by the services layer.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or console side effects.
//!
//! ## Compatibility note
//! `Book` field names are the on-disk schema of the library file and the
//! `--json` output. Keep renames explicit.

pub mod constants;
pub mod errors;
pub mod models;
