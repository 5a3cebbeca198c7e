use crate::presentation::http::errors::AppError;
use axum::extract::FromRequestParts;

/// Path parameters whose rejection is rendered like any other [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParams<T>(pub T);
