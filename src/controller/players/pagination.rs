use serde::Serialize;

/// Page numbers shown at once in the pager.
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based, always within `1..=page_count` (or 1 for an empty list).
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub page_count: usize,
}

impl Pagination {
    /// Clamps `requested_page` into range. A zero page size is treated as 1.
    #[must_use]
    pub fn new(total_items: usize, page_size: usize, requested_page: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = total_items.div_ceil(page_size);
        let current_page = requested_page.clamp(1, page_count.max(1));
        Self {
            current_page,
            page_size,
            total_items,
            page_count,
        }
    }

    /// Zero-based index range of the current page.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_items);
        start.min(end)..end
    }

    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        items.get(range).unwrap_or(&[])
    }

    /// "Showing 11-20 of 23" bounds, 1-based; `(0, 0)` when empty.
    #[must_use]
    pub fn showing(&self) -> (usize, usize) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let range = self.range();
        (range.start + 1, range.end)
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }

    /// Up to `MAX_VISIBLE_PAGES` page numbers centred on the current page.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<usize> {
        if self.page_count <= MAX_VISIBLE_PAGES {
            return (1..=self.page_count).collect();
        }
        let start = self
            .current_page
            .saturating_sub(MAX_VISIBLE_PAGES / 2)
            .clamp(1, self.page_count - MAX_VISIBLE_PAGES + 1);
        (start..start + MAX_VISIBLE_PAGES).collect()
    }
}
