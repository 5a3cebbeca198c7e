use crate::{
    domain::{
        activity::entity::Activity,
        shared::pagination::{PageRequest, PaginationView},
    },
    presentation::http::{
        errors::AppError,
        state::AppState,
        views::{self, ACTIVITY_INDEX},
    },
};
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    page: Option<String>,
}

#[derive(Serialize)]
struct ActivityIndexView<'a> {
    title: &'static str,
    activities: &'a [Activity],
    page: i64,
    pagination: &'a PaginationView,
    pages: i64,
}

#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Html<String>, AppError> {
    let request = PageRequest::from_query(query.page.as_deref());
    let feed = state.activity_feed().feed(request).await?;

    views::render(
        ACTIVITY_INDEX,
        &ActivityIndexView {
            title: "Activities",
            activities: &feed.items,
            page: feed.page,
            pagination: &feed.pagination,
            pages: feed.total_pages,
        },
    )
}
