use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::{date_range, samples, Article, NewsServiceError, SearchRequest, SearchResponse};
use crate::infrastructure::gnews::{NewsProvider, ProviderPage};

const DEFAULT_TIME_WINDOW: &str = "dias";
const DEFAULT_MAX_ARTICLES: usize = 10;

pub struct NewsService {
    provider: Arc<dyn NewsProvider>,
}

impl NewsService {
    pub fn new(provider: Arc<dyn NewsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
pub trait NewsServiceApi: Send + Sync {
    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, NewsServiceError>;
}

#[async_trait]
impl NewsServiceApi for NewsService {
    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, NewsServiceError> {
        let tema = request
            .tema
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(NewsServiceError::MissingTopic)?
            .to_string();

        // The requested label is echoed back verbatim; the resolver treats
        // unknown labels as "dias".
        let janela_tempo = request
            .janela_tempo
            .unwrap_or_else(|| DEFAULT_TIME_WINDOW.to_string());
        let max_articles = request.max_articles.unwrap_or(DEFAULT_MAX_ARTICLES);

        let range = date_range::resolve(&janela_tempo, Utc::now());

        // Availability over accuracy: every upstream failure, including the
        // unconfigured credential, serves the sample set instead of erroring.
        match self.provider.search(&tema, &range, max_articles).await {
            Ok(page) => Ok(upstream_response(tema, janela_tempo, page)),
            Err(reason) => {
                tracing::warn!(
                    error = %reason,
                    tema = %tema,
                    "Upstream search unavailable, serving sample data"
                );
                Ok(fallback_response(tema, janela_tempo, max_articles))
            }
        }
    }
}

fn upstream_response(tema: String, janela_tempo: String, page: ProviderPage) -> SearchResponse {
    let artigos: Vec<Article> = page
        .articles
        .into_iter()
        .map(|article| Article {
            titulo: article.title,
            descricao: article.description,
            url: article.url,
            fonte: article.source.name,
            data_publicacao: article.published_at,
            imagem: article.image,
        })
        .collect();

    SearchResponse {
        success: true,
        tema,
        janela_tempo,
        // Upstream-reported total, which may exceed the page length.
        total_artigos: page.total_articles,
        artigos,
    }
}

fn fallback_response(tema: String, janela_tempo: String, max_articles: usize) -> SearchResponse {
    let mut artigos = samples::sample_articles(&tema);
    artigos.truncate(max_articles);

    SearchResponse {
        success: true,
        tema,
        janela_tempo,
        total_artigos: artigos.len() as i64,
        artigos,
    }
}
