mod get_a_topic_service;
mod get_topics_service;

pub use get_a_topic_service::GetATopicService;
pub use get_topics_service::GetTopicsService;
