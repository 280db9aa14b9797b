use async_trait::async_trait;

use crate::topic::application::domain::entities::{TopicFilter, TopicFull, TopicMeta, TopicSort};

/// Rows of one page plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicQueryResult<T> {
    pub records: Vec<T>,
    pub total: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt topic row: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn get_full_topics(
        &self,
        filter: &TopicFilter,
        limit: u64,
        offset: u64,
        sort: TopicSort,
    ) -> Result<TopicQueryResult<TopicFull>, TopicQueryError>;

    async fn get_meta_of_topics(
        &self,
        filter: &TopicFilter,
        limit: u64,
        offset: u64,
        sort: TopicSort,
    ) -> Result<TopicQueryResult<TopicMeta>, TopicQueryError>;
}
