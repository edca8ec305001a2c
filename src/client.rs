use log::debug;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::image::{ImageArchiveResponse, ImageDescriptor, RawImage};
use crate::request::{parse_json_response, HttpError};

const ARCHIVE_URL: &str = "http://www.bing.com/HPImageArchive.aspx";
const IMAGE_HOST: &str = "http://www.bing.com/";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Error formatting URL")]
    Url,
    #[error("Request failed")]
    Http(#[from] HttpError),
    #[error("No images in response")]
    EmptyResult,
    #[error("Image url is empty")]
    EmptyImagePath,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(HttpError::Reqwest(err))
    }
}

/// Client for Bing's image-of-the-day archive.
///
/// Wraps a caller-supplied [`Client`]; pooling, TLS and timeouts are the
/// transport's concern. Holds no per-call state, so a single instance can
/// be shared across tasks.
pub struct ImageClient {
    client: Client,
    archive_url: String,
    image_host: String,
}

impl ImageClient {
    pub fn new(client: Client) -> Self {
        Self::with_endpoints(client, ARCHIVE_URL, IMAGE_HOST)
    }

    /// Overrides the archive endpoint and image host, mainly so tests can
    /// point the client at a local server.
    pub fn with_endpoints<A: Into<String>, H: Into<String>>(
        client: Client,
        archive_url: A,
        image_host: H,
    ) -> Self {
        Self {
            client,
            archive_url: archive_url.into(),
            image_host: image_host.into(),
        }
    }

    /// Fetches the current image descriptor for a market, e.g. "en-US".
    /// The market code is forwarded to the service verbatim; an invalid
    /// code surfaces as whatever the service answers with.
    pub async fn daily_image(&self, market: &str) -> Result<ImageDescriptor, FetchError> {
        let url = Url::parse_with_params(
            &self.archive_url,
            &[("format", "js"), ("idx", "0"), ("n", "1"), ("mkt", market)],
        )
        .ok()
        .ok_or(FetchError::Url)?;
        debug!("Requesting image descriptor from {}", url);
        let response = self.client.get(url).send().await.map_err(HttpError::from)?;
        let data = parse_json_response::<ImageArchiveResponse>(response).await?;
        data.images
            .into_iter()
            .next()
            .ok_or(FetchError::EmptyResult)
    }

    /// Fetches the descriptor for a market and then the raw bytes it
    /// points at. The second request is never issued if the descriptor
    /// fetch fails or the descriptor carries an empty path.
    pub async fn daily_image_bytes(&self, market: &str) -> Result<RawImage, FetchError> {
        let image = self.daily_image(market).await?;
        if image.url.is_empty() {
            return Err(FetchError::EmptyImagePath);
        }
        let url = Url::parse(&self.image_host)
            .and_then(|base| base.join(&image.url))
            .ok()
            .ok_or(FetchError::Url)?;
        debug!("Requesting image content from {}", url);
        let response = self.client.get(url).send().await.map_err(HttpError::from)?;
        let body = response.bytes().await.map_err(HttpError::from)?;
        Ok(body.to_vec())
    }
}
