use async_trait::async_trait;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr, NullOrdering};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::topic::application::domain::entities::{
    SortDirection, SortField, TopicFilter, TopicFull, TopicMeta, TopicSort,
};
use crate::modules::topic::application::ports::outgoing::{
    TopicQuery, TopicQueryError, TopicQueryResult,
};
use crate::shared::db::with_timeout;

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, MetaRow};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
    timeout: Duration,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    fn filtered(filter: &TopicFilter, sort: TopicSort) -> Select<TopicEntity> {
        let mut query = TopicEntity::find();

        if let Some(ref slug) = filter.slug {
            query = query.filter(TopicColumn::Slug.eq(slug.as_str()));
        }

        if let Some(ref state) = filter.state {
            query = query.filter(TopicColumn::State.eq(state.as_str()));
        }

        // Case-insensitive title search with ILIKE
        if let Some(ref title) = filter.title {
            let pattern = format!("%{}%", title.trim());
            query = query.filter(Expr::col(TopicColumn::Title).ilike(&pattern));
        }

        // Missing values sort lowest: first ascending, last descending
        let (order, nulls) = match sort.direction {
            SortDirection::Asc => (Order::Asc, NullOrdering::First),
            SortDirection::Desc => (Order::Desc, NullOrdering::Last),
        };

        // Slug breaks ties so pages stay stable
        query
            .order_by_with_nulls(sort_column(sort.field), order.clone(), nulls)
            .order_by(TopicColumn::Slug, order)
    }

    async fn count(&self, query: &Select<TopicEntity>) -> Result<u64, TopicQueryError> {
        with_timeout(self.timeout, query.clone().count(&*self.db))
            .await
            .map_err(map_db_err)
    }
}

fn sort_column(field: SortField) -> TopicColumn {
    match field {
        SortField::PublishedDate => TopicColumn::PublishedDate,
        SortField::UpdatedAt => TopicColumn::UpdatedAt,
        SortField::CreatedAt => TopicColumn::CreatedAt,
        SortField::Title => TopicColumn::Title,
        SortField::Slug => TopicColumn::Slug,
    }
}

fn map_db_err(e: DbErr) -> TopicQueryError {
    TopicQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_full_topics(
        &self,
        filter: &TopicFilter,
        limit: u64,
        offset: u64,
        sort: TopicSort,
    ) -> Result<TopicQueryResult<TopicFull>, TopicQueryError> {
        let query = Self::filtered(filter, sort);

        // Get total count
        let total = self.count(&query).await?;

        let models = with_timeout(
            self.timeout,
            query.offset(offset).limit(limit).all(&*self.db),
        )
        .await
        .map_err(map_db_err)?;

        let records = models
            .into_iter()
            .map(|m| m.to_full())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TopicQueryResult { records, total })
    }

    async fn get_meta_of_topics(
        &self,
        filter: &TopicFilter,
        limit: u64,
        offset: u64,
        sort: TopicSort,
    ) -> Result<TopicQueryResult<TopicMeta>, TopicQueryError> {
        let query = Self::filtered(filter, sort);

        // Get total count
        let total = self.count(&query).await?;

        let rows = with_timeout(
            self.timeout,
            query
                .select_only()
                .columns(MetaRow::columns())
                .offset(offset)
                .limit(limit)
                .into_model::<MetaRow>()
                .all(&*self.db),
        )
        .await
        .map_err(map_db_err)?;

        Ok(TopicQueryResult {
            records: rows.into_iter().map(MetaRow::to_meta).collect(),
            total,
        })
    }
}
