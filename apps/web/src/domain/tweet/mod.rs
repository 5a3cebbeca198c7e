pub mod comment;
pub mod entity;
pub mod repository;
