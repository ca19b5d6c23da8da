use contribot_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid header value: {source}")]
    InvalidHeaderError {
        source: http::header::InvalidHeaderValue,
    },

    #[error("Invalid URL: {url}")]
    InvalidUrlError { url: String },

    #[error("Resource not found: {url}")]
    NotFoundError { url: String },

    #[error("Unexpected status {status} from {url}")]
    StatusError { status: u16, url: String },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<http::header::InvalidHeaderValue> for GitHubError {
    fn from(e: http::header::InvalidHeaderValue) -> Self {
        GitHubError::InvalidHeaderError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::NotFoundError { url } => ApiError::NotFound { url },
            GitHubError::StatusError { status, url } => ApiError::UnexpectedStatus { status, url },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
