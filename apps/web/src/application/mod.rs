pub mod activity;
pub mod chat;
pub mod comments;
pub mod list_page;
pub mod validation;
