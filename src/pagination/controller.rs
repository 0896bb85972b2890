//! Pagination controller
//!
//! Owns the current result set and the visible window over it.

use super::types::{Controls, DisplayMetadata, Page, DEFAULT_PAGE_SIZE};
use crate::types::Brewery;
use tracing::debug;

/// Page cursor over an owned, ordered result set
///
/// The window is recomputed from scratch on [`reset`](Self::reset) and moved
/// incrementally by [`advance`](Self::advance) and
/// [`retreat`](Self::retreat). Moving past either end is a no-op.
#[derive(Debug, Clone)]
pub struct PaginationController<T = Brewery> {
    page_size: usize,
    records: Vec<T>,
    current_page: usize,
    page_count: usize,
    low_index: usize,
    high_index: usize,
}

impl<T> PaginationController<T> {
    /// Create an empty controller. A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            records: Vec::new(),
            current_page: 1,
            page_count: 1,
            low_index: 1,
            high_index: 0,
        }
    }

    /// Replace the result set and move to page 1
    pub fn reset(&mut self, records: Vec<T>) {
        let total = records.len();
        self.records = records;
        self.page_count = total.div_ceil(self.page_size).max(1);
        self.current_page = 1;
        self.low_index = 1;
        self.high_index = self.page_size.min(total);
        debug!(
            total,
            pages = self.page_count,
            page_size = self.page_size,
            "Pagination reset"
        );
    }

    /// Move to the next page. Returns `false` (and changes nothing) on the last page.
    pub fn advance(&mut self) -> bool {
        if self.current_page >= self.page_count {
            return false;
        }

        let previous_high = self.high_index;
        self.current_page += 1;
        self.low_index = previous_high + 1;
        self.high_index = previous_high + self.page_size;
        if self.current_page == self.page_count {
            self.high_index = self.total_count();
        }

        debug!(
            page = self.current_page,
            low = self.low_index,
            high = self.high_index,
            "Advanced page"
        );
        true
    }

    /// Move to the previous page. Returns `false` (and changes nothing) on page 1.
    pub fn retreat(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }

        let previous_low = self.low_index;
        self.current_page -= 1;
        self.high_index = previous_low - 1;
        self.low_index = previous_low.saturating_sub(self.page_size);
        if self.current_page == 1 {
            self.low_index = 1;
        }

        debug!(
            page = self.current_page,
            low = self.low_index,
            high = self.high_index,
            "Retreated page"
        );
        true
    }

    /// Records in the visible window
    pub fn visible_slice(&self) -> &[T] {
        if self.records.is_empty() {
            return &[];
        }
        &self.records[self.low_index - 1..self.high_index]
    }

    /// Range and page-count metadata for label rendering
    pub fn display_metadata(&self) -> DisplayMetadata {
        DisplayMetadata {
            current_page: self.current_page,
            page_count: self.page_count,
            low_index: self.low_index,
            high_index: self.high_index,
            total_count: self.total_count(),
        }
    }

    /// Navigation control state implied by the current window
    pub fn controls(&self) -> Controls {
        Controls::from_metadata(&self.display_metadata())
    }

    /// Visible slice, metadata and controls bundled for a renderer
    pub fn page(&self) -> Page<'_, T> {
        let metadata = self.display_metadata();
        Page {
            records: self.visible_slice(),
            metadata,
            controls: Controls::from_metadata(&metadata),
        }
    }

    /// Record at a 1-based position in the whole result set
    pub fn get(&self, position: usize) -> Option<&T> {
        position.checked_sub(1).and_then(|i| self.records.get(i))
    }

    /// The whole result set
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PaginationController<Brewery> {
    /// Find a brewery of the current result set by id
    pub fn find(&self, id: &str) -> Option<&Brewery> {
        self.records.iter().find(|b| b.id == id)
    }
}

impl<T> Default for PaginationController<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
