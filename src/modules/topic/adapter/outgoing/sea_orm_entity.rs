use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use uuid::Uuid;

use crate::modules::topic::application::domain::entities::{TopicFull, TopicMeta};
use crate::modules::topic::application::ports::outgoing::TopicQueryError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub slug: String,

    pub title: String,
    pub short_title: Option<String>,
    pub subtitle: Option<String>,
    pub state: String,

    pub description: Option<String>,
    pub team_description: Option<String>,

    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,

    pub leading_image: Option<String>,
    pub leading_image_portrait: Option<String>,
    pub leading_video: Option<String>,

    pub headline: Option<String>,
    pub title_position: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub relateds: Json,
    pub relateds_background: Option<String>,

    pub published_date: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

/// Row shape of the meta projection; only these columns are selected.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct MetaRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub short_title: Option<String>,
    pub subtitle: Option<String>,
    pub state: String,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub leading_image: Option<String>,
    pub published_date: Option<DateTimeWithTimeZone>,
}

impl MetaRow {
    pub fn columns() -> [Column; 10] {
        [
            Column::Id,
            Column::Slug,
            Column::Title,
            Column::ShortTitle,
            Column::Subtitle,
            Column::State,
            Column::OgDescription,
            Column::OgImage,
            Column::LeadingImage,
            Column::PublishedDate,
        ]
    }

    pub fn to_meta(self) -> TopicMeta {
        TopicMeta {
            id: self.id,
            slug: self.slug,
            title: self.title,
            short_title: self.short_title,
            subtitle: self.subtitle,
            state: self.state,
            og_description: self.og_description,
            og_image: self.og_image,
            leading_image: self.leading_image,
            published_date: self.published_date.map(Into::into),
        }
    }
}

impl Model {
    pub fn to_full(self) -> Result<TopicFull, TopicQueryError> {
        let relateds: Vec<String> = serde_json::from_value(self.relateds)
            .map_err(|e| TopicQueryError::SerializationError(e.to_string()))?;

        Ok(TopicFull {
            meta: TopicMeta {
                id: self.id,
                slug: self.slug,
                title: self.title,
                short_title: self.short_title,
                subtitle: self.subtitle,
                state: self.state,
                og_description: self.og_description,
                og_image: self.og_image,
                leading_image: self.leading_image,
                published_date: self.published_date.map(Into::into),
            },
            description: self.description,
            team_description: self.team_description,
            og_title: self.og_title,
            leading_image_portrait: self.leading_image_portrait,
            leading_video: self.leading_video,
            headline: self.headline,
            title_position: self.title_position,
            relateds,
            relateds_background: self.relateds_background,
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
