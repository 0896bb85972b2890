//! Session module
//!
//! Explicit command dispatch in place of UI callbacks.
//!
//! # Overview
//!
//! A `Session` is constructed once per run and owns the only
//! `PaginationController`. Every user action arrives as a `Command`; the
//! session performs at most one fetch for it, updates its state, and draws
//! the result through a `Renderer`.

mod command;
mod handler;

pub use command::{Command, Flow, HELP};
pub use handler::Session;
