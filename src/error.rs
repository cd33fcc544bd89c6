use dominant_color::ExtractError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No image data in '{0}'")]
    NoImageData(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid method '{0}' (GET/POST)")]
    InvalidMethod(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Failed to write trace file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
