//! Pagination module
//!
//! Client-side windowing over a fetched result set.
//!
//! # Overview
//!
//! A search or random-sample fetch yields the full result set up front.
//! The `PaginationController` owns that set and a page cursor, and exposes
//! the slice that is currently visible together with the metadata needed
//! to draw a page label and enable or disable the navigation controls.
//!
//! Window bounds are 1-based and inclusive: page 2 of 50 records at 25 per
//! page covers records 26 through 50.

mod controller;
mod types;

pub use controller::PaginationController;
pub use types::{Controls, DisplayMetadata, Page, DEFAULT_PAGE_SIZE};
