use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("api error: {0}")]
    Api(#[from] ynab::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing setting: {0}")]
    MissingSetting(&'static str),
    #[error("{0} not found")]
    NotFound(String),
}
