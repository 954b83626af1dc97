// REST client for the node-management backend (one request per call, no retry)

mod containers;
mod nodes;

use crate::error::ApiError;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::Decode(format!("invalid backend URL {}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Decode(format!(
                "backend URL cannot be a base: {}",
                base_url
            )));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL; each segment is percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, segments)).await
    }

    pub async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, segments).query(query))
            .await
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, segments).json(body))
            .await
    }

    pub async fn put<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, segments).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.send(self.request(Method::DELETE, segments)).await
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        tracing::debug!(method = %method, url = %url, "backend request");
        self.http.request(method, url)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let resp = req.send().await?;
        handle_response(resp).await
    }
}

/// Decode a success body, or turn a non-2xx response into `ApiError::Http`
/// carrying the body's `detail` (falling back to the status text).
async fn handle_response<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.bytes().await?;
    if !status.is_success() {
        let detail = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned))
            .filter(|d| !d.is_empty());
        let message = detail
            .or_else(|| status.canonical_reason().map(str::to_owned))
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        return Err(ApiError::Http {
            status: status.as_u16(),
            message,
        });
    }
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = ApiClient::new("http://backend:8000").unwrap();
        let url = client.endpoint(&["api", "nodes", "a b/c"]);
        assert_eq!(url.as_str(), "http://backend:8000/api/nodes/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new("http://backend:8000/console/").unwrap();
        let url = client.endpoint(&["api", "nodes"]);
        assert_eq!(url.as_str(), "http://backend:8000/console/api/nodes");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }
}
