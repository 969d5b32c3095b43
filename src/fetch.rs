use std::future::Future;

use log::debug;
use reqwest::Client;

use crate::{Error, Result};

/// Retrieves the raw markup of a page.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Sending HTTP request to {url}");

        let fetch_error = |source| Error::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        debug!("Reading response body from {url}");
        response.text().await.map_err(fetch_error)
    }
}
