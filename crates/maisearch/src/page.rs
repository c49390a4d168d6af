//! Page slicing for listing commands.
//!
//! The page count is `total / page_size + 1`, so a listing whose size is an
//! exact multiple of the page size reports one extra, empty trailing page.
//! Existing users see that count in every listing footer, so it is kept.

use serde::Serialize;

/// A resolved page window over `total` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based page number after clamping
    pub page: usize,
    pub start: usize,
    pub end: usize,
    pub total_pages: usize,
}

impl Page {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Compute the row window for `requested_page`.
///
/// The requested page is clamped into `[1, total_pages]`; a zero page size
/// is treated as one row per page.
pub fn paginate(total_count: usize, page_size: usize, requested_page: usize) -> Page {
    let page_size = page_size.max(1);
    let total_pages = total_count / page_size + 1;
    let page = requested_page.clamp(1, total_pages);

    let start = ((page - 1) * page_size).min(total_count);
    let end = (page * page_size).min(total_count);

    Page {
        page,
        start,
        end,
        total_pages,
    }
}

/// One page of rows together with the size of the full listing
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T> {
    pub page: Page,
    pub total: usize,
    pub rows: Vec<T>,
}

impl<T> Paged<T> {
    /// Slice `rows` down to the requested page
    pub fn from_rows(rows: Vec<T>, page_size: usize, requested_page: usize) -> Self {
        let total = rows.len();
        let page = paginate(total, page_size, requested_page);
        let rows = rows
            .into_iter()
            .skip(page.start)
            .take(page.end - page.start)
            .collect();

        Self { page, total, rows }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            page: self.page,
            total: self.total,
            rows: self.rows.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let page = paginate(23, 10, 1);
        assert_eq!(page.range(), 0..10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(23, 10, 3);
        assert_eq!(page.range(), 20..23);
    }

    #[test]
    fn test_exact_multiple_keeps_trailing_page() {
        let page = paginate(20, 10, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.range(), 20..20);
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let page = paginate(5, 10, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.range(), 0..5);
    }

    #[test]
    fn test_empty_listing() {
        let page = paginate(0, 10, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_zero_page_size() {
        let page = paginate(3, 0, 2);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.range(), 1..2);
    }

    #[test]
    fn test_paged_from_rows() {
        let rows: Vec<u32> = (0..23).collect();
        let paged = Paged::from_rows(rows, 10, 3);
        assert_eq!(paged.total, 23);
        assert_eq!(paged.rows, vec![20, 21, 22]);
        assert_eq!(paged.map(|r| r * 2).rows, vec![40, 42, 44]);
    }
}
