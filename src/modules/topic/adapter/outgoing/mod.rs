pub mod sea_orm_entity;
mod topic_query_postgres;

pub use topic_query_postgres::TopicQueryPostgres;
