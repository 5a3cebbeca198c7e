pub mod loaders;
pub mod logging;
pub mod request_id;
pub mod user;
