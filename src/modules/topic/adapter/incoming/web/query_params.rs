use actix_web::web;
use serde::Deserialize;

use crate::topic::application::domain::entities::{TopicFilter, TopicListRequest, TopicSort};

/// Query string of the topic list endpoint, kept as raw strings so that
/// malformed values can be reported instead of rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct RawTopicListQuery {
    #[serde(alias = "where")]
    pub q: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub sort: Option<String>,
    pub full: Option<String>,
}

/// A list query that could not be parsed. `limit` and `offset` hold whatever
/// was read successfully (0 otherwise) so the empty page can echo them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid topic query: {reason}")]
pub struct InvalidTopicQuery {
    pub reason: String,
    pub limit: u64,
    pub offset: u64,
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Largest `limit` or `offset` accepted; Postgres binds both as BIGINT.
pub const MAX_COUNT: u64 = i64::MAX as u64;

fn parse_count(raw: Option<&str>, name: &str) -> Result<u64, String> {
    match non_empty(raw) {
        None => Ok(0),
        Some(v) => v
            .parse::<u64>()
            .ok()
            .filter(|n| *n <= MAX_COUNT)
            .ok_or_else(|| {
                format!(
                    "{} must be an integer between 0 and {}: {}",
                    name, MAX_COUNT, v
                )
            }),
    }
}

/// Boolean forms accepted for `full`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

pub fn parse_topic_list_query(query_string: &str) -> Result<TopicListRequest, InvalidTopicQuery> {
    let raw = web::Query::<RawTopicListQuery>::from_query(query_string)
        .map_err(|e| InvalidTopicQuery {
            reason: e.to_string(),
            limit: 0,
            offset: 0,
        })?
        .into_inner();

    let limit = parse_count(raw.limit.as_deref(), "limit");
    let offset = parse_count(raw.offset.as_deref(), "offset");

    let parsed_limit = limit.as_ref().map_or(0, |v| *v);
    let parsed_offset = offset.as_ref().map_or(0, |v| *v);
    let invalid = move |reason: String| InvalidTopicQuery {
        reason,
        limit: parsed_limit,
        offset: parsed_offset,
    };

    let limit = limit.map_err(invalid)?;
    let offset = offset.map_err(invalid)?;

    let filter = match non_empty(raw.q.as_deref()) {
        None => TopicFilter::default(),
        Some(q) => serde_json::from_str::<TopicFilter>(q)
            .map_err(|e| invalid(format!("q is not a valid filter: {}", e)))?,
    };

    let sort = match non_empty(raw.sort.as_deref()) {
        None => None,
        Some(s) => Some(
            s.parse::<TopicSort>()
                .map_err(|e| invalid(e.to_string()))?,
        ),
    };

    let full = match non_empty(raw.full.as_deref()) {
        None => false,
        Some(f) => parse_bool(f).ok_or_else(|| invalid(format!("full is not a boolean: {}", f)))?,
    };

    Ok(TopicListRequest {
        filter,
        limit,
        offset,
        sort,
        full,
    })
}
