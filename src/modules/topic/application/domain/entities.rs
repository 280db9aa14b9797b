use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_LIMIT: u64 = 10;

// ============================================================
// Projections
// ============================================================

/// Listing-level projection of a topic.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicMeta {
    pub id: Uuid,
    #[schema(example = "far-sea-fishing")]
    pub slug: String,
    pub title: String,
    pub short_title: Option<String>,
    pub subtitle: Option<String>,
    #[schema(example = "published")]
    pub state: String,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub leading_image: Option<String>,
    pub published_date: Option<DateTime<Utc>>,
}

/// Complete projection of a topic.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicFull {
    #[serde(flatten)]
    pub meta: TopicMeta,
    pub description: Option<String>,
    pub team_description: Option<String>,
    pub og_title: Option<String>,
    pub leading_image_portrait: Option<String>,
    pub leading_video: Option<String>,
    pub headline: Option<String>,
    pub title_position: Option<String>,
    /// Slugs of related posts, in display order
    pub relateds: Vec<String>,
    pub relateds_background: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Either projection, as returned by the read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TopicRecord {
    Meta(TopicMeta),
    Full(TopicFull),
}

impl TopicRecord {
    pub fn slug(&self) -> &str {
        match self {
            TopicRecord::Meta(meta) => &meta.slug,
            TopicRecord::Full(full) => &full.meta.slug,
        }
    }
}

// ============================================================
// Query descriptor
// ============================================================

/// Filter criteria accepted in the `q` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicFilter {
    /// Exact slug
    pub slug: Option<String>,
    /// Exact publication state
    pub state: Option<String>,
    /// Case-insensitive title substring
    pub title: Option<String>,
}

impl TopicFilter {
    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    PublishedDate,
    UpdatedAt,
    CreatedAt,
    Title,
    Slug,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::PublishedDate => "publishedDate",
            SortField::UpdatedAt => "updatedAt",
            SortField::CreatedAt => "createdAt",
            SortField::Title => "title",
            SortField::Slug => "slug",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort expression such as `-publishedDate`. A leading `-` means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for TopicSort {
    fn default() -> Self {
        Self {
            field: SortField::PublishedDate,
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported sort field: {0}")]
pub struct UnknownSortField(pub String);

impl FromStr for TopicSort {
    type Err = UnknownSortField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (direction, name) = match raw.strip_prefix('-') {
            Some(rest) => (SortDirection::Desc, rest),
            None => (SortDirection::Asc, raw),
        };

        let field = match name {
            "publishedDate" => SortField::PublishedDate,
            "updatedAt" => SortField::UpdatedAt,
            "createdAt" => SortField::CreatedAt,
            "title" => SortField::Title,
            "slug" => SortField::Slug,
            _ => return Err(UnknownSortField(raw.to_string())),
        };

        Ok(Self { field, direction })
    }
}

impl fmt::Display for TopicSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction == SortDirection::Desc {
            write!(f, "-")?;
        }
        write!(f, "{}", self.field.as_str())
    }
}

/// Parsed list request. `limit == 0` and `sort == None` mean "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicListRequest {
    pub filter: TopicFilter,
    pub limit: u64,
    pub offset: u64,
    pub sort: Option<TopicSort>,
    pub full: bool,
}

/// One page of topics plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicPage {
    pub records: Vec<TopicRecord>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl TopicPage {
    pub fn empty(offset: u64, limit: u64) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            offset,
            limit,
        }
    }
}
