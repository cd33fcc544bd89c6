//! Mock HTTP server for testing fetch and image color services.

use wiremock::{
    matchers::{body_string_contains, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Wrapper around wiremock MockServer with convenience methods
pub struct MockHttpServer {
    pub server: MockServer,
}

impl MockHttpServer {
    /// Start a new mock HTTP server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the base URL of the mock server
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get URL for a specific path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    /// Mock a GET endpoint returning raw bytes with a content type
    pub async fn mock_get_bytes(&self, endpoint: &str, body: Vec<u8>, content_type: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(body)
                    .insert_header("content-type", content_type),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a simple GET endpoint returning JSON
    pub async fn mock_get_json(&self, endpoint: &str, response: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(response)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a GET endpoint with query parameters
    pub async fn mock_get_with_params(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        response: serde_json::Value,
    ) {
        let mut mock = Mock::given(method("GET")).and(path(endpoint));
        for (name, value) in params {
            mock = mock.and(query_param(*name, *value));
        }
        mock.respond_with(
            ResponseTemplate::new(200)
                .set_body_json(response)
                .insert_header("content-type", "application/json"),
        )
        .mount(&self.server)
        .await;
    }

    /// Mock a POST endpoint expecting a form body containing each `key=value`
    pub async fn mock_post_form(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        response: serde_json::Value,
    ) {
        let mut mock = Mock::given(method("POST"))
            .and(path(endpoint))
            .and(header(
                "content-type",
                "application/x-www-form-urlencoded",
            ));
        for (name, value) in params {
            mock = mock.and(body_string_contains(format!("{name}={value}")));
        }
        mock.respond_with(
            ResponseTemplate::new(200)
                .set_body_json(response)
                .insert_header("content-type", "application/json"),
        )
        .mount(&self.server)
        .await;
    }

    /// Mock a GET endpoint returning a non-JSON text body
    pub async fn mock_get_text(&self, endpoint: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .insert_header("content-type", "text/plain"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a redirect from `endpoint` to `target`
    pub async fn mock_redirect(&self, endpoint: &str, target: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(302).insert_header("location", target))
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint that returns an error
    pub async fn mock_error(&self, endpoint: &str, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .mount(&self.server)
            .await;
    }
}
