//! Blocking HTTP fetch: raw bytes for images, decoded JSON for APIs.

use reqwest::blocking::{Client, Response};
use std::str::FromStr;
use std::time::Duration;

use crate::error::FetchError;
use crate::models::HttpConfig;

/// HTTP methods accepted by [`HttpFetcher::fetch_json`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// Parameters go into the query string
    #[default]
    Get,
    /// Parameters go into a form-encoded body
    Post,
}

impl FromStr for HttpMethod {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(FetchError::InvalidMethod(s.to_string())),
        }
    }
}

/// Thin wrapper around a configured blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let mut client_builder =
            Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        // Configure redirect policy
        if config.follow_redirects {
            client_builder =
                client_builder.redirect(reqwest::redirect::Policy::limited(config.max_redirects));
        } else {
            client_builder = client_builder.redirect(reqwest::redirect::Policy::none());
        }

        if let Some(ref user_agent) = config.user_agent {
            client_builder = client_builder.user_agent(user_agent.clone());
        }

        let client = client_builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET `url` and return the body bytes
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url = %url, "Fetching bytes");

        let response = check_status(self.client.get(url).send()?)?;
        let bytes = response.bytes()?;

        tracing::debug!(url = %url, size = bytes.len(), "Fetched bytes");
        Ok(bytes.to_vec())
    }

    /// Send `params` to `url` and decode the JSON response
    pub fn fetch_json(
        &self,
        url: &str,
        params: &[(String, String)],
        method: HttpMethod,
    ) -> Result<serde_json::Value, FetchError> {
        tracing::debug!(url = %url, method = ?method, params = params.len(), "Fetching JSON");

        let request = match method {
            HttpMethod::Get => self.client.get(url).query(params),
            HttpMethod::Post => self.client.post(url).form(params),
        };

        let response = check_status(request.send()?)?;
        let text = response.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::warn!(url = %response.url(), status = status.as_u16(), "HTTP request failed");
    Err(FetchError::Status {
        status: status.as_u16(),
        url: response.url().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
    }

    #[test]
    fn test_method_parsing_rejects_others() {
        let result = "DELETE".parse::<HttpMethod>();
        assert!(matches!(result, Err(FetchError::InvalidMethod(m)) if m == "DELETE"));
    }

    #[test]
    fn test_fetcher_builds_with_defaults() {
        assert!(HttpFetcher::new(&HttpConfig::default()).is_ok());

        let no_redirects = HttpConfig {
            follow_redirects: false,
            user_agent: Some("ktk-test".to_string()),
            ..Default::default()
        };
        assert!(HttpFetcher::new(&no_redirects).is_ok());
    }
}
