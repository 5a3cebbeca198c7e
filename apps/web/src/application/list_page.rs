use crate::domain::shared::{
    errors::DomainError,
    pagination::{PageRequest, PaginationView, compute_pagination, total_pages},
};
use futures_util::future::try_join;
use serde::Serialize;
use std::future::Future;

/// One page of a listing together with everything a list view needs to
/// render its page links.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: i64,
    /// 1-based.
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub pagination: PaginationView,
}

/// Awaits a page listing and a total count, then builds the page view model.
///
/// Both lookups run concurrently. If either fails, the error is returned and
/// nothing of the other is kept.
pub async fn compose_page<T, L, C>(
    request: PageRequest,
    list: L,
    count: C,
) -> Result<Page<T>, DomainError>
where
    L: Future<Output = Result<Vec<T>, DomainError>>,
    C: Future<Output = Result<i64, DomainError>>,
{
    let (items, count) = try_join(list, count).await?;
    let pages = total_pages(count, request.per_page());

    Ok(Page {
        items,
        count,
        page: request.page(),
        per_page: request.per_page(),
        total_pages: pages,
        pagination: compute_pagination(request.page(), pages),
    })
}
