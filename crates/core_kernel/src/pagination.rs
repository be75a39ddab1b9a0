//! Offset pagination
//!
//! `PageRequest` is what list endpoints accept (`?page=0&size=20`, 0-based)
//! and `Page` is what they return. Stores only need the offset and limit.

use serde::{Deserialize, Serialize};

/// Page size used when the request does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on the page size a caller may request
pub const MAX_PAGE_SIZE: u32 = 2000;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// 0-based page index
    #[serde(default)]
    pub page: u32,
    /// Items per page
    #[serde(default = "default_page_size")]
    pub size: u32,
}

impl PageRequest {
    /// Creates a normalized page request
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }.normalize()
    }

    /// Clamps the size into `1..=MAX_PAGE_SIZE`
    pub fn normalize(self) -> Self {
        Self {
            page: self.page,
            size: self.size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// Maximum number of records to return
    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: DEFAULT_PAGE_SIZE }
    }
}

/// A page of results together with totals for the whole collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
    pub number_of_elements: usize,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Builds a page from the records of one slice and the collection total
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let request = request.normalize();
        let size = u64::from(request.size);
        let total_pages = total_elements.div_ceil(size);
        let number_of_elements = content.len();

        Self {
            empty: content.is_empty(),
            content,
            number: request.page,
            size: request.size,
            total_elements,
            total_pages,
            first: request.page == 0,
            last: u64::from(request.page) + 1 >= total_pages,
            number_of_elements,
        }
    }

    /// Cuts one page out of an already materialized collection
    pub fn from_slice(items: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        let request = request.normalize();
        let content = items
            .iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .cloned()
            .collect();
        Self::new(content, request, items.len() as u64)
    }

    /// Maps the page content, keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
            number_of_elements: self.number_of_elements,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_zero_size() {
        let request = PageRequest { page: 3, size: 0 }.normalize();
        assert_eq!(request.size, 1);
        assert_eq!(request.offset(), 3);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let request = PageRequest::new(1, 10_000);
        assert_eq!(request.size, MAX_PAGE_SIZE);
        assert_eq!(request.offset(), u64::from(MAX_PAGE_SIZE));
    }

    #[test]
    fn from_slice_reports_totals() {
        let items: Vec<u32> = (0..45).collect();
        let page = Page::from_slice(&items, PageRequest::new(2, 20));

        assert_eq!(page.content, (40..45).collect::<Vec<_>>());
        assert_eq!(page.total_elements, 45);
        assert_eq!(page.total_pages, 3);
        assert!(!page.first);
        assert!(page.last);
        assert_eq!(page.number_of_elements, 5);
    }

    #[test]
    fn empty_collection_is_first_and_last() {
        let page: Page<u32> = Page::from_slice(&[], PageRequest::default());
        assert!(page.empty);
        assert!(page.first);
        assert!(page.last);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::new(0, 2), 5).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_pages, 3);
        assert!(!page.last);
    }
}
