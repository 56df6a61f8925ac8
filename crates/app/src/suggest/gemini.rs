//! Generative Language API client.

use std::sync::Arc;

use market_catalog_core::Category;
use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;
use secrecy::{ExposeSecret, SecretString};
use tracing::{instrument, warn};
use url::Url;

use crate::config::SuggestionConfig;

use super::error::{ApiErrorResponse, SuggestionError};
use super::types::{GenerateContentRequest, GenerateContentResponse};
use super::{DescriptionSuggester, EMPTY_DESCRIPTION, FALLBACK_DESCRIPTION, prompt};

const API_KEY_HEADER: &str = "x-goog-api-key";
const TEMPERATURE: f32 = 0.7;
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Gemini `generateContent` client.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: Url,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.inner.model)
            .field("base_url", &self.inner.base_url.as_str())
            .field("has_api_key", &self.inner.api_key.is_some())
            .finish()
    }
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `SuggestionError::Http` if the HTTP client cannot be built.
    pub fn new(config: &SuggestionConfig) -> Result<Self, SuggestionError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(GeminiClientInner {
                client,
                api_key: config.api_key.clone(),
                model: config.model.clone(),
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Full URL of the `generateContent` endpoint.
    ///
    /// # Errors
    ///
    /// Returns `SuggestionError::Endpoint` if the base URL cannot be joined.
    pub fn endpoint(&self) -> Result<Url, SuggestionError> {
        let path = format!("v1beta/models/{}:generateContent", self.inner.model);
        Ok(self.inner.base_url.join(&path)?)
    }

    /// Request a description, surfacing every failure.
    ///
    /// Returns [`EMPTY_DESCRIPTION`] when the model answers with no text.
    ///
    /// # Errors
    ///
    /// Returns an error if no key is configured, the request fails, or the
    /// API answers with an error or an unparseable body.
    #[instrument(skip(self), fields(model = %self.inner.model))]
    pub async fn generate_description(
        &self,
        name: &str,
        category: Category,
    ) -> Result<String, SuggestionError> {
        let api_key = self
            .inner
            .api_key
            .as_ref()
            .ok_or(SuggestionError::MissingApiKey)?;

        let request = GenerateContentRequest::prompt(prompt(name, category), TEMPERATURE);

        let response = self
            .inner
            .client
            .post(self.endpoint()?)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_status(status, response).await);
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| SuggestionError::Parse(format!("Failed to parse response: {e}")))?;

        let text = parsed.text();
        if text.is_empty() {
            Ok(EMPTY_DESCRIPTION.to_string())
        } else {
            Ok(text)
        }
    }
}

impl DescriptionSuggester for GeminiClient {
    async fn suggest(&self, name: &str, category: Category) -> String {
        match self.generate_description(name, category).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, product = name, "Description suggestion failed, using fallback");
                FALLBACK_DESCRIPTION.to_string()
            }
        }
    }
}

async fn error_from_status(status: StatusCode, response: reqwest::Response) -> SuggestionError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return SuggestionError::RateLimited(retry_after);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return SuggestionError::Unauthorized(status.to_string());
    }

    match response.text().await {
        Ok(body) => match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(api_error) => SuggestionError::Api {
                status: api_error.error.status,
                message: api_error.error.message,
            },
            Err(_) => SuggestionError::Api {
                status: status.to_string(),
                message: body,
            },
        },
        Err(e) => SuggestionError::Http(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    use super::*;

    /// Serve one canned HTTP response and hand back the raw request.
    async fn serve_once(status_line: &str, body: &str) -> (Url, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            tx.send(request).ok();
        });

        (Url::parse(&format!("http://{addr}/")).unwrap(), rx)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0_u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    fn client(base_url: Url, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(&SuggestionConfig {
            api_key: api_key.map(|k| SecretString::from(k.to_string())),
            model: "gemini-3-flash-preview".to_string(),
            base_url,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint() {
        let client = client(Url::parse("https://generativelanguage.googleapis.com").unwrap(), None);
        assert_eq!(
            client.endpoint().unwrap().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let client = client(Url::parse("http://localhost/").unwrap(), Some("k3y-Secr3t-Val"));
        let debug = format!("{client:?}");
        assert!(!debug.contains("k3y-Secr3t-Val"));
        assert!(debug.contains("has_api_key: true"));
    }

    #[tokio::test]
    async fn test_success_returns_model_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Café encorpado e aromático."}]}}]}"#;
        let (base_url, request) = serve_once("200 OK", body).await;

        let text = client(base_url, Some("test-key")).suggest("Café", Category::Mercearia).await;
        assert_eq!(text, "Café encorpado e aromático.");

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-3-flash-preview:generateContent"));
        assert!(request.to_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains("\"temperature\":0.7"));
    }

    #[tokio::test]
    async fn test_empty_text_uses_placeholder() {
        let (base_url, _request) = serve_once("200 OK", r#"{"candidates":[]}"#).await;
        let text = client(base_url, Some("test-key")).suggest("Café", Category::Mercearia).await;
        assert_eq!(text, EMPTY_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_error_and_fallback() {
        let (base_url, _request) = serve_once("429 Too Many Requests", "{}").await;
        let client = client(base_url, Some("test-key"));
        let err = client
            .generate_description("Café", Category::Mercearia)
            .await
            .unwrap_err();
        assert!(matches!(err, SuggestionError::RateLimited(DEFAULT_RETRY_AFTER_SECS)));
    }

    #[tokio::test]
    async fn test_api_error_body_is_parsed() {
        let body = r#"{"error":{"code":400,"message":"Invalid model","status":"INVALID_ARGUMENT"}}"#;
        let (base_url, _request) = serve_once("400 Bad Request", body).await;
        let err = client(base_url, Some("test-key"))
            .generate_description("Café", Category::Mercearia)
            .await
            .unwrap_err();
        assert!(matches!(err, SuggestionError::Api { ref status, .. } if status == "INVALID_ARGUMENT"));
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let (base_url, _request) = serve_once("200 OK", "not json").await;
        let text = client(base_url, Some("test-key")).suggest("Café", Category::Mercearia).await;
        assert_eq!(text, FALLBACK_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() {
        let text = client(Url::parse("http://127.0.0.1:9/").unwrap(), None)
            .suggest("Café", Category::Mercearia)
            .await;
        assert_eq!(text, FALLBACK_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back() {
        // Bind then drop to get a port nothing listens on.
        let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
        let base_url = Url::parse(&format!("http://{addr}/")).unwrap();

        let text = client(base_url, Some("test-key")).suggest("Café", Category::Mercearia).await;
        assert_eq!(text, FALLBACK_DESCRIPTION);
    }
}
