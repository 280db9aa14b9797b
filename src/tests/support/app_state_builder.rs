use crate::oauth::application::ports::incoming::use_cases::OAuthLoginUseCase;
use crate::tests::support::stubs::*;
use crate::topic::application::domain::entities::TopicPage;
use crate::topic::application::ports::incoming::use_cases::{GetATopicUseCase, GetTopicsUseCase};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_topics: Arc<dyn GetTopicsUseCase + Send + Sync>,
    get_a_topic: Arc<dyn GetATopicUseCase + Send + Sync>,
    facebook_login: Arc<dyn OAuthLoginUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_topics: Arc::new(StubGetTopicsUseCase::success(TopicPage::empty(0, 10))),
            get_a_topic: Arc::new(StubGetATopicUseCase::not_found()),
            facebook_login: Arc::new(StubOAuthLoginUseCase::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.get_topics = Arc::new(uc);
        self
    }

    pub fn with_get_a_topic(mut self, uc: impl GetATopicUseCase + Send + Sync + 'static) -> Self {
        self.get_a_topic = Arc::new(uc);
        self
    }

    pub fn with_facebook_login(
        mut self,
        uc: impl OAuthLoginUseCase + Send + Sync + 'static,
    ) -> Self {
        self.facebook_login = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_topics_use_case: self.get_topics,
            get_a_topic_use_case: self.get_a_topic,
            facebook_login_use_case: self.facebook_login,
        })
    }
}
