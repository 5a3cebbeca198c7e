pub mod errors;
pub mod list_options;
pub mod pagination;
