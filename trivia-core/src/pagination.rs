//! Fixed-size pagination

use serde::{Deserialize, Serialize};

/// Items per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page request.
///
/// Construction never fails: anything below 1 becomes page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
}

impl Pagination {
    /// Create pagination, clamping to page 1 at the bottom.
    pub fn new(page: i64) -> Self {
        let page = u32::try_from(page.max(1)).unwrap_or(u32::MAX);
        Self { page }
    }

    /// Parse a raw `?page=` value.
    ///
    /// Absent or non-integer input falls back to page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Page number (1-indexed)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// SQL OFFSET value
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * QUESTIONS_PER_PAGE as u64
    }

    /// SQL LIMIT value
    pub fn limit(&self) -> u64 {
        QUESTIONS_PER_PAGE as u64
    }

    /// Window of `items` covered by this page, clipped to its bounds.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset())
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// One page of results plus the size of the whole result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items for the requested page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: u64,
}

impl<T> Paginated<T> {
    /// True when the requested page holds no items (the total may still be non-zero).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Page the full ordered sequence `items`.
pub fn paginate<T: Clone>(items: &[T], page: Pagination) -> Paginated<T> {
    Paginated {
        items: page.slice(items).to_vec(),
        total: items.len() as u64,
    }
}

/// Query parameters for pagination.
///
/// `page` is kept raw so a malformed value degrades to page 1 instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::parse(params.page.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1).offset(), 0);
        assert_eq!(Pagination::new(2).offset(), 10);
        assert_eq!(Pagination::new(5).offset(), 40);
    }

    #[test]
    fn clamps_page() {
        assert_eq!(Pagination::new(0).page(), 1);
        assert_eq!(Pagination::new(-7).page(), 1);
        assert_eq!(Pagination::new(i64::MAX).page(), u32::MAX);
    }

    #[test]
    fn parse_falls_back_to_first_page() {
        assert_eq!(Pagination::parse(None).page(), 1);
        assert_eq!(Pagination::parse(Some("abc")).page(), 1);
        assert_eq!(Pagination::parse(Some("2.5")).page(), 1);
        assert_eq!(Pagination::parse(Some("")).page(), 1);
        assert_eq!(Pagination::parse(Some("-3")).page(), 1);
        assert_eq!(Pagination::parse(Some(" 3 ")).page(), 3);
    }

    #[test]
    fn second_page_of_twelve() {
        let ids: Vec<i32> = (1..=12).collect();
        let page = paginate(&ids, Pagination::new(2));
        assert_eq!(page.items, vec![11, 12]);
        assert_eq!(page.total, 12);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let ids: Vec<i32> = (1..=12).collect();
        let page = paginate(&ids, Pagination::new(3));
        assert!(page.is_empty());
        assert_eq!(page.total, 12);

        let page = paginate(&ids, Pagination::new(i64::MAX));
        assert!(page.is_empty());
    }

    #[test]
    fn params_conversion() {
        let params = PaginationParams {
            page: Some("4".into()),
        };
        assert_eq!(Pagination::from(params).page(), 4);
        assert_eq!(Pagination::from(PaginationParams::default()).page(), 1);
    }
}
