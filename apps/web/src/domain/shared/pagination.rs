use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fixed number of records shown on every paged listing.
pub const PER_PAGE: i64 = 10;

/// Maximum number of numbered page links rendered around the current page.
const LINK_WINDOW: i64 = 5;

/// A requested page, always 1-based and never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageRequest {
    page: i64,
    per_page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Non-positive pages fall back to the first page.
    pub fn new(page: i64) -> Self {
        Self {
            page: if page > 0 { page } else { 1 },
            per_page: PER_PAGE,
        }
    }

    /// Builds a request from the raw `?page=` value. Missing, non-numeric and
    /// non-positive values all select the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// Zero-based page index used by the store.
    pub fn index(&self) -> i64 {
        self.page - 1
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        self.index().saturating_mul(self.per_page)
    }
}

/// `ceil(count / per_page)`, zero when there is nothing to page through.
pub fn total_pages(count: i64, per_page: i64) -> i64 {
    if count <= 0 || per_page <= 0 {
        return 0;
    }
    count / per_page + i64::from(count % per_page != 0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageLink {
    pub number: i64,
    pub current: bool,
}

/// Page links handed to list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaginationView {
    pub current_page: i64,
    pub total_pages: i64,
    pub prev: Option<i64>,
    pub next: Option<i64>,
    pub links: Vec<PageLink>,
}

/// Computes the link window for a listing.
///
/// `current_page` is taken as given and not clamped: an out-of-range page
/// still gets a window anchored at the nearest real page, and only the links
/// themselves are bounded to `1..=total_pages`.
pub fn compute_pagination(current_page: i64, total_pages: i64) -> PaginationView {
    if total_pages <= 0 {
        return PaginationView {
            current_page,
            total_pages: total_pages.max(0),
            prev: None,
            next: None,
            links: Vec::new(),
        };
    }

    let anchor = current_page.clamp(1, total_pages);
    let end = anchor
        .saturating_sub(LINK_WINDOW / 2)
        .max(1)
        .saturating_add(LINK_WINDOW - 1)
        .min(total_pages);
    let start = end.saturating_sub(LINK_WINDOW - 1).max(1);

    let links = (start..=end)
        .map(|number| PageLink {
            number,
            current: number == current_page,
        })
        .collect();

    let prev = (current_page > 1 && current_page - 1 <= total_pages).then(|| current_page - 1);
    let next = (current_page < total_pages).then(|| current_page.saturating_add(1).max(1));

    PaginationView {
        current_page,
        total_pages,
        prev,
        next,
        links,
    }
}
