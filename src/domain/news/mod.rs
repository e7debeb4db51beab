pub mod date_range;
pub mod error;
pub mod samples;
pub mod service;

pub use date_range::DateRange;
pub use error::NewsServiceError;
pub use service::{NewsService, NewsServiceApi};

use serde::{Deserialize, Serialize};

/// Body of POST /news/search. `tema` is optional at the serde level so its
/// absence becomes a domain validation error (400) instead of a 422 from the
/// extractor. The Portuguese field names are the frontend's wire contract.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub tema: Option<String>,
    pub janela_tempo: Option<String>,
    pub max_articles: Option<usize>,
}

/// One article in a search response. Attributes may be empty strings but the
/// keys are always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub titulo: String,
    pub descricao: String,
    pub url: String,
    pub fonte: String,
    pub data_publicacao: String,
    pub imagem: String,
}

/// Response for POST /news/search. `total_artigos` comes from the upstream
/// count and may be larger than `artigos.len()`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub tema: String,
    pub janela_tempo: String,
    pub total_artigos: i64,
    pub artigos: Vec<Article>,
}
