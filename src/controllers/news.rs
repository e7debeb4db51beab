use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::news::{NewsService, NewsServiceApi, SearchRequest, SearchResponse},
    error::AppResult,
};

pub struct NewsController {
    news_service: Arc<NewsService>,
}

impl NewsController {
    pub fn new(news_service: Arc<NewsService>) -> Self {
        Self { news_service }
    }

    /// POST /news/search - Search articles by topic and time window
    pub async fn search(
        State(controller): State<Arc<NewsController>>,
        Json(request): Json<SearchRequest>,
    ) -> AppResult<Json<SearchResponse>> {
        let response = controller.news_service.search(request).await?;
        Ok(Json(response))
    }
}
