use super::pagination::PageRequest;

/// Options handed to a repository `list` call.
///
/// `page` is the zero-based page index. When either `page` or `per_page` is
/// absent the listing is unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions<C> {
    pub criteria: C,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl<C> ListOptions<C> {
    pub fn all(criteria: C) -> Self {
        Self {
            criteria,
            page: None,
            per_page: None,
        }
    }

    pub fn paged(criteria: C, request: &PageRequest) -> Self {
        Self {
            criteria,
            page: Some(request.index()),
            per_page: Some(request.per_page()),
        }
    }

    pub fn limit(&self) -> Option<i64> {
        self.page.and(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        match (self.page, self.per_page) {
            (Some(page), Some(per_page)) => page.max(0).saturating_mul(per_page),
            _ => 0,
        }
    }
}
