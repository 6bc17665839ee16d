//! Page stage: the two window strategies over the filtered working set.
//!
//! Both windows hold counters only, never record data, so they cannot go
//! stale: the controller re-derives the working set on every input change
//! and the window is re-applied to the fresh set.

use std::cmp::Ordering;

/// Records shown per page, and the step size of the reveal window.
pub const PAGE_SIZE: usize = 5;

/// Fixed-page window with a 1-based current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self { current_page: 1 }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(total: usize) -> usize {
        total.div_ceil(PAGE_SIZE)
    }

    /// Moves to `page` if it is inside `[1, total_pages]`; anything outside
    /// is a no-op, never a wrap. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize, total: usize) -> bool {
        if page >= 1 && page <= Self::total_pages(total) && page != self.current_page {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Pulls the current page back into `[1, max(1, total_pages)]` after
    /// the filtered set shrank underneath it.
    pub fn clamp(&mut self, total: usize) {
        let last = Self::total_pages(total).max(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }

    /// The window of `items` the current page covers.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(items.len());
        if start >= items.len() {
            &[]
        } else {
            &items[start..end]
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

/// Incremental-reveal window: starts at one page size and only ever grows
/// (until reset), in page-size steps, capped at the working-set length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    visible: usize,
}

impl Reveal {
    pub fn new() -> Self {
        Self { visible: PAGE_SIZE }
    }

    /// How many records are currently revealed out of a set of `total`.
    pub fn visible(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    /// The "more needed" signal, fired when the last revealed record comes
    /// into view. Grows the window by one page size, capped at `total`.
    /// Returns whether anything new became visible.
    pub fn more(&mut self, total: usize) -> bool {
        match self.visible.cmp(&total) {
            Ordering::Less => {
                self.visible = (self.visible + PAGE_SIZE).min(total);
                true
            }
            _ => false,
        }
    }

    /// Back to the initial window. Called whenever filter, search or sort
    /// inputs change.
    pub fn reset(&mut self) {
        self.visible = PAGE_SIZE;
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}
