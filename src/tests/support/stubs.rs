use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::oauth::application::domain::entities::{OAuthCallback, OAuthProvider};
use crate::oauth::application::ports::incoming::use_cases::{OAuthLoginError, OAuthLoginUseCase};
use crate::topic::application::domain::entities::{
    TopicFull, TopicListRequest, TopicMeta, TopicPage, TopicRecord,
};
use crate::topic::application::ports::incoming::use_cases::{
    GetATopicError, GetATopicUseCase, GetTopicsError, GetTopicsUseCase,
};

// ============================================================
// Topic fixtures
// ============================================================

pub fn sample_meta(slug: &str) -> TopicMeta {
    TopicMeta {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: format!("Topic {}", slug),
        short_title: None,
        subtitle: Some("A subtitle".to_string()),
        state: "published".to_string(),
        og_description: Some("Shared description".to_string()),
        og_image: Some("https://cdn.example.com/og.jpg".to_string()),
        leading_image: None,
        published_date: Utc.with_ymd_and_hms(2017, 5, 1, 8, 0, 0).single(),
    }
}

pub fn sample_full(slug: &str) -> TopicFull {
    TopicFull {
        meta: sample_meta(slug),
        description: Some("Long description".to_string()),
        team_description: Some("Reporting team".to_string()),
        og_title: None,
        leading_image_portrait: None,
        leading_video: None,
        headline: Some("Headline".to_string()),
        title_position: Some("center".to_string()),
        relateds: vec!["post-a".to_string(), "post-b".to_string()],
        relateds_background: None,
        updated_at: Utc::now(),
    }
}

// ============================================================
// Topic use cases
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<TopicPage, GetTopicsError>,
    calls: Arc<Mutex<Vec<TopicListRequest>>>,
}

impl StubGetTopicsUseCase {
    pub fn success(page: TopicPage) -> Self {
        Self {
            result: Ok(page),
            calls: Arc::default(),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<TopicListRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self, request: TopicListRequest) -> Result<TopicPage, GetTopicsError> {
        self.calls.lock().unwrap().push(request);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetATopicUseCase {
    result: Result<TopicRecord, GetATopicError>,
    calls: Arc<Mutex<Vec<(String, bool)>>>,
}

impl StubGetATopicUseCase {
    pub fn found(record: TopicRecord) -> Self {
        Self {
            result: Ok(record),
            calls: Arc::default(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetATopicError::NotFound),
            calls: Arc::default(),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetATopicError::QueryFailed(msg.into())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GetATopicUseCase for StubGetATopicUseCase {
    async fn execute(&self, slug: &str, full: bool) -> Result<TopicRecord, GetATopicError> {
        self.calls.lock().unwrap().push((slug.to_string(), full));
        self.result.clone()
    }
}

// ============================================================
// OAuth login
// ============================================================

#[derive(Clone)]
pub struct StubOAuthLoginUseCase {
    result: Result<String, OAuthLoginError>,
    begun: Arc<Mutex<Vec<Option<String>>>>,
    completed: Arc<Mutex<Vec<OAuthCallback>>>,
}

impl Default for StubOAuthLoginUseCase {
    fn default() -> Self {
        Self::completing("https://www.example.com/?token=jwt")
    }
}

impl StubOAuthLoginUseCase {
    pub fn completing(destination: &str) -> Self {
        Self {
            result: Ok(destination.to_string()),
            begun: Arc::default(),
            completed: Arc::default(),
        }
    }

    pub fn failing(err: OAuthLoginError) -> Self {
        Self {
            result: Err(err),
            begun: Arc::default(),
            completed: Arc::default(),
        }
    }

    pub fn begun(&self) -> Vec<Option<String>> {
        self.begun.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<OAuthCallback> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl OAuthLoginUseCase for StubOAuthLoginUseCase {
    fn provider(&self) -> OAuthProvider {
        OAuthProvider::Facebook
    }

    fn login_url(&self) -> &str {
        "https://accounts.example.com/login"
    }

    fn begin(&self, location: Option<&str>) -> String {
        self.begun.lock().unwrap().push(location.map(str::to_string));
        format!(
            "https://consent.example.com/?location={}",
            location.unwrap_or_default()
        )
    }

    async fn complete(&self, callback: OAuthCallback) -> Result<String, OAuthLoginError> {
        self.completed.lock().unwrap().push(callback);
        self.result.clone()
    }
}
