use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error("Tema é obrigatório")]
    MissingTopic,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<NewsServiceError> for AppError {
    fn from(err: NewsServiceError) -> Self {
        match err {
            NewsServiceError::MissingTopic => AppError::BadRequest(err.to_string()),
            NewsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
