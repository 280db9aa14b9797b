mod topic_query;

pub use topic_query::{TopicQuery, TopicQueryError, TopicQueryResult};
