mod get_a_topic_use_case;
mod get_topics_use_case;

pub use get_a_topic_use_case::{GetATopicError, GetATopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
