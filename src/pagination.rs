//! Page and carousel position over a list of known length.
//!
//! An empty list still has one (empty) page, so `page` is always a valid
//! index and `page_count() >= 1`.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total: usize,
    page_size: usize,
    page: usize,
}

impl Paginator {
    /// A zero `page_size` is treated as 1
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            page: 0,
        }
    }

    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Item indices on the current page
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Next page, clamped at the last one
    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    /// Previous page, clamped at the first one
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    /// Carousel forward: wraps from the last page to the first
    pub fn next_wrapping(&mut self) {
        self.page = (self.page + 1) % self.page_count();
    }

    /// Carousel backward: wraps from the first page to the last
    pub fn previous_wrapping(&mut self) {
        let count = self.page_count();
        self.page = (self.page + count - 1) % count;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Change the item count (after a delete, say), keeping the page valid
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.min(self.page_count() - 1);
    }

    /// Current page of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}
