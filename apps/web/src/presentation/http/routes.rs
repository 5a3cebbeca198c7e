use super::{
    handlers::{activities, chat, comments, fallback, health},
    middleware::{
        loaders::{load_chat, load_tweet},
        logging::logging_middleware,
        request_id::request_id_middleware,
        user::require_user,
    },
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    // `{id}` is resolved into the loaded chat before `show` runs.
    let chat_show = Router::new()
        .route("/chat/{id}", get(chat::show))
        .route_layer(middleware::from_fn_with_state(state.clone(), load_chat));

    let comment_routes = Router::new()
        .route("/tweets/{id}/comments", post(comments::create))
        .route(
            "/tweets/{id}/comments/{comment_id}",
            delete(comments::destroy),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), load_tweet));

    // Everything in here requires a signed-in user.
    let signed_in = Router::new()
        // Activity
        .route("/activities", get(activities::index))
        // Chat
        .route("/chat", get(chat::index))
        .route("/chat/get/{userid}", get(chat::get_chat))
        .route("/chats", post(chat::create))
        .merge(chat_show)
        // Comments
        .merge(comment_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(signed_in)
        .method_not_allowed_fallback(fallback::not_found)
        .fallback(fallback::not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
