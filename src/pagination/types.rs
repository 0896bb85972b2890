//! Pagination types
//!
//! Read-only views of the controller state handed to renderers.

use serde::Serialize;

/// Records per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Range and page-count metadata for the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayMetadata {
    /// Current page, 1-based
    pub current_page: usize,
    /// Number of pages (at least 1, even for an empty set)
    pub page_count: usize,
    /// First visible record, 1-based inclusive
    pub low_index: usize,
    /// Last visible record, 1-based inclusive (0 when the set is empty)
    pub high_index: usize,
    /// Records in the whole result set
    pub total_count: usize,
}

impl DisplayMetadata {
    /// Is there a page before this one?
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Is there a page after this one?
    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }

    /// Is the result set empty?
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Number of records in the visible window
    pub fn visible_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.high_index + 1 - self.low_index
        }
    }

    /// Page label, e.g. `Page 2 of 4 · showing 26–50 of 87`
    pub fn label(&self) -> String {
        if self.is_empty() {
            return format!("Page {} of {}", self.current_page, self.page_count);
        }
        format!(
            "Page {} of {} · showing {}–{} of {}",
            self.current_page, self.page_count, self.low_index, self.high_index, self.total_count
        )
    }
}

/// Enabled state of the previous/next navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Controls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Controls {
    /// Controls as implied by the window position
    pub fn from_metadata(meta: &DisplayMetadata) -> Self {
        Self {
            previous_enabled: meta.has_previous(),
            next_enabled: meta.has_next(),
        }
    }

    /// Both controls disabled (e.g. while a fetch is pending)
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Everything a renderer needs to draw one page
#[derive(Debug)]
pub struct Page<'a, T> {
    /// Records in the visible window
    pub records: &'a [T],
    /// Range and page-count metadata
    pub metadata: DisplayMetadata,
    /// Navigation control state
    pub controls: Controls,
}

impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<'a, T> Page<'a, T> {
    /// Disable both controls, keeping records and metadata
    #[must_use]
    pub fn with_controls_disabled(mut self) -> Self {
        self.controls = Controls::disabled();
        self
    }

    /// Iterate records paired with their 1-based position in the whole set
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a T)> {
        let start = self.metadata.low_index;
        let records: &'a [T] = self.records;
        records
            .iter()
            .enumerate()
            .map(move |(offset, record)| (start + offset, record))
    }
}
