use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("Got response status {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("Unexpected HTML: {0}")]
    Scrape(String),
}

impl Error {
    pub(crate) fn scrape<S: Into<String>>(what: S) -> Self {
        Self::Scrape(what.into())
    }
}
