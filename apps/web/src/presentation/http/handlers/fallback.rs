use crate::presentation::http::{
    errors::{AppError, not_found_page},
    middleware::user::decode_current_user,
    state::AppState,
};
use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::Response,
};

/// Catch-all for unknown paths and unsupported methods. Sits behind the same
/// session check as the routes it stands in for.
pub async fn not_found(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    decode_current_user(&headers, &state.config.jwt_secret)?;
    tracing::debug!(%uri, "No route matched");
    Ok(not_found_page(uri.path()))
}
