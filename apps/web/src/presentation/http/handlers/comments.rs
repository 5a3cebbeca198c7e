use crate::{
    application::comments::dto::CommentForm,
    presentation::http::{
        errors::AppError,
        extract::PathParams,
        middleware::{loaders::LoadedTweet, user::CurrentUser},
        state::AppState,
    },
};
use axum::{
    Extension, Form,
    extract::State,
    http::StatusCode,
    response::Redirect,
};
use uuid::Uuid;

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(LoadedTweet(tweet)): Extension<LoadedTweet>,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, AppError> {
    let Some(body) = form.into_body()? else {
        return Ok(Redirect::to("/"));
    };
    state.comments_use_case().add(&tweet, user.id, body).await?;
    Ok(Redirect::to("/"))
}

pub async fn destroy(
    State(state): State<AppState>,
    Extension(LoadedTweet(tweet)): Extension<LoadedTweet>,
    PathParams((_, comment_id)): PathParams<(Uuid, Uuid)>,
) -> StatusCode {
    match state.comments_use_case().remove(tweet.id, comment_id).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, tweet_id = %tweet.id, comment_id = %comment_id, "Comment removal failed");
            StatusCode::BAD_REQUEST
        }
    }
}
