//! Command handler layer.
//!
//! This module owns console-oriented orchestration and output wiring.
//!
//! ## Files
//! - `shell.rs` — interactive numbered menu (the default when no command is given).
//! - `runtime.rs` — one-shot add/remove/search/list/stats commands.
//!
//! ## Principles
//! - Parse/match user input here.
//! - Delegate catalog and file logic to `services/*`.
//! - Keep text line formats identical between the two front ends.

pub mod runtime;
pub mod shell;

pub use runtime::handle_runtime_commands;
pub use shell::Shell;
