use gloo::net::http::{Method, RequestBuilder, Response};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use leptos::{provide_context, use_context};
use mime::APPLICATION_JSON;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{Select, StoreConfig, StoreError, Table};

/// Key header the hosted store expects alongside the bearer token.
const APIKEY: &str = "apikey";
/// Asks the store not to echo inserted rows back.
const PREFER: &str = "Prefer";

/// Thin handle over the hosted store's REST surface.
///
/// Each call is a single round trip, there is no retrying, caching or
/// batching here. The handle is provided through leptos context at the top
/// of the app so every component reaches the same configured instance.
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: StoreConfig,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Self {
        StoreClient { config }
    }

    pub fn provide_context(config: StoreConfig) {
        provide_context(StoreClient::new(config));
    }

    pub fn use_client() -> Self {
        use_context().expect("StoreClient missing from context!")
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(url)
            .method(method)
            .header(APIKEY, &self.config.anon_key)
            .header(
                AUTHORIZATION.as_str(),
                &format!("Bearer {}", self.config.anon_key),
            )
            .header(ACCEPT.as_str(), APPLICATION_JSON.essence_str())
    }

    /// Run `query` against its table and deserialize the resulting rows.
    pub async fn select<T: DeserializeOwned>(&self, query: Select) -> Result<Vec<T>, StoreError> {
        if !self.config.is_configured() {
            return Err(StoreError::Unconfigured);
        }

        let url = format!(
            "{}?{}",
            self.config.endpoint(query.table()),
            query.query_string()
        );
        debug!("select({url})");

        let response = self.request(Method::GET, &url).send().await?;
        let response = ok_response(response).await?;

        let content_type = response.headers().get(CONTENT_TYPE.as_str());
        let is_json = content_type
            .as_ref()
            .is_some_and(|v| v.starts_with(APPLICATION_JSON.essence_str()));
        if !is_json {
            return Err(StoreError::WrongContentType {
                expected: APPLICATION_JSON.to_string(),
                got: content_type,
            });
        }

        let rows = response.json::<Vec<T>>().await?;
        debug!("select({url}) -> {} rows", rows.len());
        Ok(rows)
    }

    /// Insert a single row. The store owns it permanently from here on.
    pub async fn insert<T: Serialize>(&self, table: Table, row: &T) -> Result<(), StoreError> {
        if !self.config.is_configured() {
            return Err(StoreError::Unconfigured);
        }

        let url = self.config.endpoint(table);
        debug!("insert({url})");

        let request = self
            .request(Method::POST, &url)
            .header(PREFER, "return=minimal")
            .json(&[row])?;
        let response = request.send().await?;
        ok_response(response).await?;

        Ok(())
    }
}

/// Folds a non-2xx response into [`StoreError::Response`], keeping the
/// store-supplied message body.
async fn ok_response(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    Err(StoreError::Response { status, message })
}
