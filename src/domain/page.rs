use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 1000;

/// A 1-based page request, normalised from raw query values.
///
/// `page` is always at least 1 and `size` lies in `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, size: DEFAULT_PAGE_SIZE }
    }
}

impl PageRequest {
    /// Missing or nonsensical values fall back to page 1 and the default size.
    /// Oversized pages are capped at [`MAX_PAGE_SIZE`].
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        let page = page
            .filter(|page| *page >= 1)
            .map_or(1, |page| usize::try_from(page).unwrap_or(usize::MAX));
        let size = size
            .filter(|size| *size > 0)
            .map_or(DEFAULT_PAGE_SIZE, |size| usize::try_from(size).unwrap_or(MAX_PAGE_SIZE))
            .min(MAX_PAGE_SIZE);
        Self { page, size }
    }

    /// Parses the raw `page` and `size` query strings.
    pub fn from_query(page: &str, size: &str) -> Self {
        Self::new(page.parse().ok(), size.parse().ok())
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Rows to skip. Saturates for pages far past the end.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.size)
    }
}

/// One page of results plus the numbers a pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub size: usize,
    pub previous_page: usize,
    pub next_page: usize,
    pub page_range: Vec<usize>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: usize) -> Self {
        let total_pages = total_count.div_ceil(request.size);
        Self {
            items,
            current_page: request.page,
            total_pages,
            size: request.size,
            previous_page: request.page.saturating_sub(1),
            next_page: request.page.saturating_add(1),
            page_range: (1..=total_pages).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_normalisation() {
        assert_eq!(PageRequest::from_query("", ""), PageRequest::default());
        assert_eq!(PageRequest::from_query("0", "-3"), PageRequest::default());
        let request = PageRequest::from_query("3", "25");
        assert_eq!((request.page(), request.size()), (3, 25));
        assert_eq!(request.offset(), 50);
    }

    #[test]
    fn test_extreme_values_stay_in_range() {
        let request = PageRequest::from_query("9223372036854775807", "9223372036854775807");
        assert_eq!(request.size(), MAX_PAGE_SIZE);
        assert_eq!(request.offset(), usize::MAX);

        let page: Page<u8> = Page::new(Vec::new(), request, 3);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.next_page, request.page().saturating_add(1));
        assert!(page.next_page >= page.current_page);
    }

    #[test]
    fn test_page_arithmetic() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(Some(2), Some(3)), 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.previous_page, 1);
        assert_eq!(page.next_page, 3);
        assert_eq!(page.page_range, vec![1, 2, 3]);

        let empty: Page<u8> = Page::new(Vec::new(), PageRequest::default(), 0);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.page_range.is_empty());
    }
}
