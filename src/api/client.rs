use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

/// Base URL of the PONS public API.
pub const BASE_URL: &str = "https://api.pons.com/v1/";

/// Header carrying the API secret.
const SECRET_HEADER: &str = "X-Secret";

/// Language used for dictionary labels in the dictionary list.
const LABEL_LANGUAGE: &str = "en";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request URL {url}: {reason}")]
    Url { url: String, reason: String },
    #[error("could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("bad status code: {0}")]
    Status(u16),
}

/// Raw result of a dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// HTTP 200 with the response body.
    Body(Vec<u8>),
    /// HTTP 204: the API has no translation for the word.
    NoContent,
}

/// The remote endpoints the lookup pipeline depends on.
#[allow(async_fn_in_trait)]
pub trait DictionaryApi {
    /// `GET dictionary?q=<word>&l=<dict>` with the API secret.
    async fn fetch_translation(&self, word: &str, dict: &str) -> Result<Fetched, ApiError>;

    /// `GET dictionaries?language=en`. There is no special 204 case here.
    async fn fetch_dictionaries(&self) -> Result<Vec<u8>, ApiError>;
}

pub struct PonsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PonsClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(BASE_URL.to_string(), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = api_key;
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let url = format!("{}/{path}", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(&url, params).map_err(|e| ApiError::Url {
            url,
            reason: e.to_string(),
        })
    }

    async fn get(&self, url: Url, secret: Option<&str>) -> Result<reqwest::Response, ApiError> {
        let mut request = self.client.get(url.clone());
        if let Some(secret) = secret {
            request = request.header(SECRET_HEADER, secret);
        }

        request.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })
    }

    async fn body(response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        let url = response.url().to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { url, source })?;
        Ok(bytes.to_vec())
    }
}

impl DictionaryApi for PonsClient {
    async fn fetch_translation(&self, word: &str, dict: &str) -> Result<Fetched, ApiError> {
        let url = self.endpoint("dictionary", &[("q", word), ("l", dict)])?;
        let response = self.get(url, Some(&self.api_key)).await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(Fetched::NoContent),
            StatusCode::OK => Ok(Fetched::Body(Self::body(response).await?)),
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    async fn fetch_dictionaries(&self) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint("dictionaries", &[("language", LABEL_LANGUAGE)])?;
        let response = self.get(url, None).await?;

        if response.status() != StatusCode::OK {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        Self::body(response).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_endpoint_encodes_query() {
        let client = PonsClient::new("secret".to_string());

        let url = client
            .endpoint("dictionary", &[("q", "ice cream"), ("l", "ende")])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.pons.com/v1/dictionary?q=ice+cream&l=ende"
        );
    }

    #[test]
    fn test_dictionaries_endpoint() {
        let client = PonsClient::with_base_url("http://localhost:8080".to_string(), String::new());

        let url = client
            .endpoint("dictionaries", &[("language", LABEL_LANGUAGE)])
            .unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/dictionaries?language=en");
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(ApiError::Status(403).to_string(), "bad status code: 403");
    }
}
