use async_trait::async_trait;

use crate::topic::application::domain::entities::TopicRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetATopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetATopicUseCase: Send + Sync {
    async fn execute(&self, slug: &str, full: bool) -> Result<TopicRecord, GetATopicError>;
}
