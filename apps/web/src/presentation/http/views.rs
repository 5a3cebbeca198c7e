//! Server-side rendered views.
//!
//! Templates are compiled into the binary and registered once, on first use.
//! Handlers call [`render`] with a template name and any serializable view
//! model; error pages go through [`render_error_page`], which never fails.

use crate::presentation::http::errors::AppError;
use axum::response::Html;
use lazy_static::lazy_static;
use serde::Serialize;
use tera::{Context, Tera};

pub const CHAT_INDEX: &str = "chat/index.html";
pub const CHAT_CONVERSATION: &str = "chat/chat.html";
pub const ACTIVITY_INDEX: &str = "activities/index.html";
pub const NOT_FOUND_PAGE: &str = "pages/404.html";
pub const ERROR_PAGE: &str = "pages/500.html";

const TEMPLATE_FILES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    (
        "pagination.html",
        include_str!("../../../templates/pagination.html"),
    ),
    (CHAT_INDEX, include_str!("../../../templates/chat/index.html")),
    (
        CHAT_CONVERSATION,
        include_str!("../../../templates/chat/chat.html"),
    ),
    (
        ACTIVITY_INDEX,
        include_str!("../../../templates/activities/index.html"),
    ),
    (NOT_FOUND_PAGE, include_str!("../../../templates/pages/404.html")),
    (ERROR_PAGE, include_str!("../../../templates/pages/500.html")),
];

lazy_static! {
    static ref TEMPLATES: Result<Tera, tera::Error> = build_registry();
}

fn build_registry() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATE_FILES.iter().copied())?;
    Ok(tera)
}

fn registry() -> Result<&'static Tera, AppError> {
    (*TEMPLATES)
        .as_ref()
        .map_err(|e| AppError::Template(e.to_string()))
}

/// Fails startup early when a template does not compile.
pub fn ensure_templates() -> anyhow::Result<()> {
    registry()
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("Template registry failed to load: {}", e))
}

pub fn render<T: Serialize>(template: &str, data: &T) -> Result<Html<String>, AppError> {
    let tera = registry()?;
    let context = Context::from_serialize(data)?;
    Ok(Html(tera.render(template, &context)?))
}

/// Renders an error page, degrading to plain text if the template itself
/// cannot be rendered.
pub fn render_error_page<T: Serialize>(template: &str, data: &T, fallback: &str) -> Html<String> {
    match render(template, data) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(template, error = %e, "Error page render failed");
            Html(fallback.to_string())
        }
    }
}
