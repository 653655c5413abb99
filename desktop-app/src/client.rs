use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, ClientBuilder, Url};
use shared::data::{Car, CarPage, CarRecord};
use thiserror::Error;

/// The errors that can occur while talking to the car service.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The request could not be sent, the service answered with a non-success status or the
    /// body could not be decoded. Wraps a [`reqwest::Error`].
    #[error("An error occured when interacting with the server: {0}")]
    Http(Arc<reqwest::Error>),
    /// A link could not be turned into a URL.
    #[error("Could not resolve {0:?} against the service address: {1}")]
    InvalidUrl(String, url::ParseError),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Http(Arc::new(value))
    }
}

/// The operations the car service offers.
#[async_trait]
pub trait CarApi: Send + Sync {
    /// Retrieves every car the service holds, in the order the service lists them.
    async fn fetch_cars(&self) -> Result<Vec<CarRecord>, Error>;
    async fn create_car(&self, car: &Car) -> Result<(), Error>;
    /// Replaces the record found at `href` with `car`.
    async fn update_car(&self, href: &str, car: &Car) -> Result<(), Error>;
    async fn delete_car(&self, href: &str) -> Result<(), Error>;
}

/// [`CarApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: Url,
}

impl RestClient {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the underlying HTTP client could not be built.
    pub fn new(mut base_url: Url) -> Result<Self, Error> {
        // Without a trailing slash `join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = ClientBuilder::new()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(RestClient { http, base_url })
    }

    /// Resolves a link against the base URL. Absolute links are returned unchanged.
    ///
    /// # Errors
    ///
    /// This function will return an error if `href` is not a valid URL reference.
    pub fn resolve(&self, href: &str) -> Result<Url, Error> {
        self.base_url
            .join(href)
            .map_err(|err| Error::InvalidUrl(href.to_owned(), err))
    }

    fn cars_url(&self) -> Result<Url, Error> {
        self.resolve("cars")
    }
}

#[async_trait]
impl CarApi for RestClient {
    async fn fetch_cars(&self) -> Result<Vec<CarRecord>, Error> {
        let url = self.cars_url()?;
        debug!("GET {url}");

        let page: CarPage = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page.into_records())
    }

    async fn create_car(&self, car: &Car) -> Result<(), Error> {
        let url = self.cars_url()?;
        debug!("POST {url}: {car:?}");

        self.http
            .post(url)
            .json(car)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update_car(&self, href: &str, car: &Car) -> Result<(), Error> {
        let url = self.resolve(href)?;
        debug!("PUT {url}: {car:?}");

        self.http
            .put(url)
            .json(car)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_car(&self, href: &str) -> Result<(), Error> {
        let url = self.resolve(href)?;
        debug!("DELETE {url}");

        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}
