mod get_a_topic;
mod get_topics;

pub use get_a_topic::*;
pub use get_topics::*;
