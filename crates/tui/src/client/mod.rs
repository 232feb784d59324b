use std::time::Duration;

use api_types::{
    ErrorResponse,
    expense::{Category, ExpenseDeleted, ExpenseNew, ExpenseUpdate, ExpenseView},
    stats::Totals,
};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::error::{AppError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not found")]
    NotFound,
    #[error("rejected: {0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the expenses API, rooted at the collection URL.
#[derive(Debug, Clone)]
pub struct Client {
    collection: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(backend_url: &str) -> Result<Self> {
        let collection =
            Url::parse(backend_url).map_err(|err| AppError::BackendUrl(err.to_string()))?;
        if collection.cannot_be_a_base() || !matches!(collection.scheme(), "http" | "https") {
            return Err(AppError::BackendUrl(format!(
                "{backend_url} is not an http(s) URL"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { collection, http })
    }

    fn endpoint(&self, segments: &[&str]) -> std::result::Result<Url, ClientError> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Server("backend url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn list(&self) -> std::result::Result<Vec<ExpenseView>, ClientError> {
        let url = self.endpoint(&[])?;
        send(self.http.get(url)).await
    }

    pub async fn get(&self, id: Uuid) -> std::result::Result<ExpenseView, ClientError> {
        let id = id.to_string();
        let url = self.endpoint(&[id.as_str()])?;
        send(self.http.get(url)).await
    }

    pub async fn create(&self, payload: &ExpenseNew) -> std::result::Result<ExpenseView, ClientError> {
        let url = self.endpoint(&[])?;
        send(self.http.post(url).json(payload)).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: &ExpenseUpdate,
    ) -> std::result::Result<ExpenseView, ClientError> {
        let id = id.to_string();
        let url = self.endpoint(&[id.as_str()])?;
        send(self.http.put(url).json(payload)).await
    }

    pub async fn delete(&self, id: Uuid) -> std::result::Result<ExpenseDeleted, ClientError> {
        let id = id.to_string();
        let url = self.endpoint(&[id.as_str()])?;
        send(self.http.delete(url)).await
    }

    pub async fn by_category(
        &self,
        category: Category,
    ) -> std::result::Result<Vec<ExpenseView>, ClientError> {
        let url = self.endpoint(&["category", category.as_str()])?;
        send(self.http.get(url)).await
    }

    pub async fn totals(&self) -> std::result::Result<Totals, ClientError> {
        let url = self.endpoint(&["stats", "total"])?;
        send(self.http.get(url)).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> std::result::Result<T, ClientError> {
    let res = request.send().await?;

    if res.status().is_success() {
        return Ok(res.json::<T>().await?);
    }

    let status = res.status();
    let body = res.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|err| err.error)
        .unwrap_or_else(|_| format!("unexpected status {status}"));

    let err = match status.as_u16() {
        400 => ClientError::Validation(message),
        404 => ClientError::NotFound,
        _ => ClientError::Server(message),
    };
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_the_collection_url() {
        let client = Client::new("http://localhost:3500/api/expenses").unwrap();

        assert_eq!(
            client.endpoint(&[]).unwrap().as_str(),
            "http://localhost:3500/api/expenses"
        );
        assert_eq!(
            client.endpoint(&["stats", "total"]).unwrap().as_str(),
            "http://localhost:3500/api/expenses/stats/total"
        );
        assert_eq!(
            client.endpoint(&["category", "Food"]).unwrap().as_str(),
            "http://localhost:3500/api/expenses/category/Food"
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let client = Client::new("http://localhost:3500/api/expenses/").unwrap();
        assert_eq!(
            client.endpoint(&["abc"]).unwrap().as_str(),
            "http://localhost:3500/api/expenses/abc"
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(Client::new("not a url").is_err());
        assert!(Client::new("mailto:someone@example.com").is_err());
    }
}
