//! Pagination utilities for service layer
//!
//! Turns raw `page`/`limit` query strings into a 1-based page and computes
//! the slice window over a filtered result set.

use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT }
    }
}

/// Pagination metadata returned next to a page of results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_products: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Parse raw query values. Non-numeric or non-positive input falls back to the default.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// `[start, end)` in the unclipped index space.
    pub fn window(self) -> (u64, u64) {
        let start = (self.page - 1).saturating_mul(self.limit);
        let end = self.page.saturating_mul(self.limit);
        (start, end)
    }

    /// Slice `items` to this page and describe the result.
    pub fn paginate<T>(self, items: Vec<T>) -> (Vec<T>, PageInfo) {
        let total = items.len() as u64;
        let (start, end) = self.window();
        let page_items = if start >= total {
            Vec::new()
        } else {
            let take = (end.min(total) - start) as usize;
            items.into_iter().skip(start as usize).take(take).collect()
        };
        let info = PageInfo {
            current_page: self.page,
            total_pages: total.div_ceil(self.limit),
            total_products: total,
            has_next: end < total,
            has_prev: start > 0,
        };
        (page_items, info)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map(|n| n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.limit, 10);
    }

    #[test]
    fn non_numeric_input_falls_back_to_defaults() {
        assert_eq!(Pagination::from_raw(Some("abc"), Some("x2")), Pagination::default());
        assert_eq!(Pagination::from_raw(None, None), Pagination::default());
        assert_eq!(Pagination::from_raw(Some(""), Some("2.5")), Pagination::default());
    }

    #[test]
    fn non_positive_input_falls_back_to_defaults() {
        assert_eq!(Pagination::from_raw(Some("0"), Some("-3")), Pagination::default());
        assert_eq!(Pagination::from_raw(Some("-1"), Some("0")), Pagination::default());
    }

    #[test]
    fn numeric_input_is_kept() {
        assert_eq!(Pagination::from_raw(Some("3"), Some(" 2 ")), Pagination { page: 3, limit: 2 });
    }

    #[test]
    fn last_partial_page() {
        let (items, info) = Pagination { page: 3, limit: 2 }.paginate(vec![1, 2, 3, 4, 5]);
        assert_eq!(items, vec![5]);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_products, 5);
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn first_page_has_next_not_prev() {
        let (items, info) = Pagination { page: 1, limit: 2 }.paginate(vec![1, 2, 3]);
        assert_eq!(items, vec![1, 2]);
        assert!(info.has_next);
        assert!(!info.has_prev);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let (items, info) = Pagination { page: 9, limit: 2 }.paginate(vec![1, 2, 3]);
        assert!(items.is_empty());
        assert_eq!(info.current_page, 9);
        assert_eq!(info.total_pages, 2);
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn empty_input() {
        let (items, info) = Pagination::default().paginate(Vec::<u8>::new());
        assert!(items.is_empty());
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.total_products, 0);
        assert!(!info.has_next);
        assert!(!info.has_prev);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let (items, info) = Pagination { page: u64::MAX, limit: u64::MAX }.paginate(vec![1]);
        assert!(items.is_empty());
        assert!(info.has_prev);
    }
}
