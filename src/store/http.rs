//! REST backend for the product record store.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list      | `GET    {base}/products` |
//! | get       | `GET    {base}/products/{id}` |
//! | create    | `POST   {base}/products` |
//! | update    | `PUT    {base}/products/{id}` |
//! | delete    | `DELETE {base}/products/{id}` |
//!
//! Responses may be bare (`[...]`, `{...}`) or wrapped (`{"products": [...]}`,
//! `{"product": {...}}`); both shapes are accepted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::RemoteError;
use crate::framework::RecordStore;
use crate::model::{Product, ProductFields, ProductId};

pub struct HttpStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, RemoteError> {
        Self::new(&config.api_base_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, id: Option<&ProductId>) -> String {
        match id {
            Some(id) => format!("{}/products/{}", self.base_url, id),
            None => format!("{}/products", self.base_url),
        }
    }

    /// Sends one request and returns the body of a 2xx response.
    ///
    /// A 404 becomes [`RemoteError::NotFound`] only when the call targeted an id.
    async fn send(
        &self,
        method: Method,
        id: Option<&ProductId>,
        body: Option<&ProductFields>,
    ) -> Result<String, RemoteError> {
        let url = self.url(id);
        debug!(%method, %url, "HTTP request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Transport(transport_message(&e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RemoteError::Transport(transport_message(&e)))?;
        debug!(status = status.as_u16(), bytes = text.len(), "HTTP response");

        match (status, id) {
            (status, _) if status.is_success() => Ok(text),
            (status, Some(id)) if status == StatusCode::NOT_FOUND => {
                Err(RemoteError::NotFound(id.to_string()))
            }
            (status, _) => Err(RemoteError::Service {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}

#[async_trait]
impl RecordStore for HttpStore {
    async fn list_all(&mut self) -> Result<Vec<Product>, RemoteError> {
        let body = self.send(Method::GET, None, None).await?;
        decode_list(&body)
    }

    async fn get_one(&mut self, id: &ProductId) -> Result<Product, RemoteError> {
        let body = self.send(Method::GET, Some(id), None).await?;
        decode_one(&body)
    }

    async fn create(&mut self, fields: ProductFields) -> Result<Product, RemoteError> {
        let body = self.send(Method::POST, None, Some(&fields)).await?;
        decode_one(&body)
    }

    async fn update(&mut self, id: &ProductId, fields: ProductFields) -> Result<Product, RemoteError> {
        let body = self.send(Method::PUT, Some(id), Some(&fields)).await?;
        decode_one(&body)
    }

    async fn remove(&mut self, id: &ProductId) -> Result<(), RemoteError> {
        self.send(Method::DELETE, Some(id), None).await?;
        Ok(())
    }
}

fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "Request timed out".to_string()
    } else if err.is_connect() {
        format!("Could not connect to the inventory service: {err}")
    } else {
        err.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneBody {
    Wrapped { product: Product },
    Bare(Product),
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, RemoteError> {
    serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))
}

/// An empty or `null` body is an empty listing.
pub(crate) fn decode_list(body: &str) -> Result<Vec<Product>, RemoteError> {
    let body = body.trim();
    if body.is_empty() || body == "null" {
        return Ok(Vec::new());
    }
    Ok(match parse::<ListBody>(body)? {
        ListBody::Bare(products) | ListBody::Wrapped { products } => products,
    })
}

pub(crate) fn decode_one(body: &str) -> Result<Product, RemoteError> {
    Ok(match parse::<OneBody>(body)? {
        OneBody::Wrapped { product } | OneBody::Bare(product) => product,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_accepts_bare_and_wrapped_bodies() {
        let bare = r#"[{"_id":"a","name":"Mug","category":"Other","price":4,"stock":1}]"#;
        assert_eq!(decode_list(bare).unwrap()[0].id.as_str(), "a");

        let wrapped = r#"{"products":[{"id":"b","name":"Mug","category":"Other","price":4,"stock":1}]}"#;
        assert_eq!(decode_list(wrapped).unwrap()[0].id.as_str(), "b");

        assert!(decode_list("").unwrap().is_empty());
        assert!(decode_list("null").unwrap().is_empty());
    }

    #[test]
    fn one_accepts_bare_and_wrapped_bodies() {
        let bare = r#"{"_id":"a","name":"Mug","category":"Other","price":4,"stock":1}"#;
        assert_eq!(decode_one(bare).unwrap().name, "Mug");

        let wrapped = r#"{"product":{"_id":"a","name":"Cup","category":"Other","price":4,"stock":1}}"#;
        assert_eq!(decode_one(wrapped).unwrap().name, "Cup");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(decode_one("<html>"), Err(RemoteError::Decode(_))));
        assert!(matches!(decode_list(r#"{"items":[]}"#), Err(RemoteError::Decode(_))));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let store = HttpStore::new("http://localhost:5000/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(store.base_url(), "http://localhost:5000/api");
        assert_eq!(
            store.url(Some(&ProductId::from("x1"))),
            "http://localhost:5000/api/products/x1"
        );
    }
}
