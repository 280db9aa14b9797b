pub mod query_config;
pub mod response;

pub use query_config::custom_query_config;
pub use response::{ApiResponse, PageMeta};
