pub mod activities;
pub mod chat;
pub mod comments;
pub mod fallback;
pub mod health;
