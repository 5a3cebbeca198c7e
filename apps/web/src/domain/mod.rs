pub mod activity;
pub mod chat;
pub mod shared;
pub mod tweet;
pub mod user;
