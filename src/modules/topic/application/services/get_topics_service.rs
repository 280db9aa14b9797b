use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::{TopicListRequest, TopicPage, TopicRecord, DEFAULT_LIMIT},
    ports::incoming::use_cases::{GetTopicsError, GetTopicsUseCase},
    ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, request: TopicListRequest) -> Result<TopicPage, GetTopicsError> {
        let limit = if request.limit == 0 {
            DEFAULT_LIMIT
        } else {
            request.limit
        };
        let sort = request.sort.unwrap_or_default();
        let offset = request.offset;

        let (records, total) = if request.full {
            let page = self
                .query
                .get_full_topics(&request.filter, limit, offset, sort)
                .await
                .map_err(|e| GetTopicsError::QueryFailed(e.to_string()))?;
            let records = page.records.into_iter().map(TopicRecord::Full).collect();
            (records, page.total)
        } else {
            let page = self
                .query
                .get_meta_of_topics(&request.filter, limit, offset, sort)
                .await
                .map_err(|e| GetTopicsError::QueryFailed(e.to_string()))?;
            let records = page.records.into_iter().map(TopicRecord::Meta).collect();
            (records, page.total)
        };

        Ok(TopicPage {
            records,
            total,
            offset,
            limit,
        })
    }
}
