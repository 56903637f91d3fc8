use serde::Serialize;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// A 1-based page request, normalised on construction.
///
/// Pages below 1 are read as page 1 and page sizes are clamped to `[1, MAX_PAGE_SIZE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// One page of results plus the total number of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}
