use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::{TopicFilter, TopicRecord, TopicSort},
    ports::incoming::use_cases::{GetATopicError, GetATopicUseCase},
    ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetATopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetATopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetATopicUseCase for GetATopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, slug: &str, full: bool) -> Result<TopicRecord, GetATopicError> {
        let filter = TopicFilter::by_slug(slug);
        let sort = TopicSort::default();

        let record = if full {
            self.query
                .get_full_topics(&filter, 1, 0, sort)
                .await
                .map_err(|e| GetATopicError::QueryFailed(e.to_string()))?
                .records
                .into_iter()
                .next()
                .map(TopicRecord::Full)
        } else {
            self.query
                .get_meta_of_topics(&filter, 1, 0, sort)
                .await
                .map_err(|e| GetATopicError::QueryFailed(e.to_string()))?
                .records
                .into_iter()
                .next()
                .map(TopicRecord::Meta)
        };

        record.ok_or(GetATopicError::NotFound)
    }
}
