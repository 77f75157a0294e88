use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Raw pagination/sort query parameters as they arrive on the wire. Kept as
/// strings so they can be flattened into list-endpoint query DTOs and parsed
/// leniently; unparsable values fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Normalized pagination request. Out-of-range values fall back to the
/// defaults instead of failing the request, matching the lenient query
/// parsing the admin frontend relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: "id".to_string(),
            sort_order: SortOrder::Asc,
        }
    }
}

impl From<PaginationQuery> for PageRequest {
    fn from(q: PaginationQuery) -> Self {
        let mut pr = PageRequest::default();

        if let Some(page) = q.page.as_deref().and_then(|p| p.parse::<u64>().ok()) {
            if page >= 1 {
                pr.page = page;
            }
        }

        if let Some(size) = q.page_size.as_deref().and_then(|s| s.parse::<u64>().ok()) {
            if (1..=MAX_PAGE_SIZE).contains(&size) {
                pr.page_size = size;
            }
        }

        if let Some(sort_by) = q.sort_by {
            if !sort_by.is_empty() {
                pr.sort_by = sort_by;
            }
        }

        if q.sort_order.as_deref() == Some("desc") {
            pr.sort_order = SortOrder::Desc;
        }

        pr
    }
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

/// Paginated result envelope: `{data, total, page, page_size, total_pages}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> PageResult<T> {
    pub fn new(data: Vec<T>, total: u64, page: &PageRequest) -> Self {
        Self {
            data,
            total,
            page: page.page,
            page_size: page.page_size,
            total_pages: total.div_ceil(page.page_size),
        }
    }
}
