//! Default HTTP transport over reqwest

use super::traits::{Method, Transport, TransportError, TransportRequest, TransportResponse};
use async_trait::async_trait;
use serde_json::Value;

/// Transport performing real HTTP exchanges.
///
/// Get-style requests carry the field set as a query string; everything
/// else is sent as a JSON body. Non-success statuses become
/// [`TransportError::Status`] with the parsed JSON payload when the
/// response body was JSON.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpTransport {
    /// Transport that treats every target as an absolute URL
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport resolving relative targets against `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    /// Reuse an existing client (connection pool, default headers)
    pub fn with_client(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self { client, base_url }
    }

    fn resolve_url(&self, target: &str) -> String {
        match &self.base_url {
            Some(base) if !target.starts_with("http://") && !target.starts_with("https://") => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    target.trim_start_matches('/')
                )
            }
            _ => target.to_string(),
        }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let url = self.resolve_url(&request.url);
        let mut builder = self.client.request(to_reqwest_method(request.method), &url);
        if let Some(params) = &request.params {
            builder = builder.query(params);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        let status = response.status();
        let data = response.json::<Value>().await.ok();

        if status.is_success() {
            Ok(TransportResponse {
                status: status.as_u16(),
                data: data.unwrap_or(Value::Null),
            })
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
                data,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldMap;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_fields() -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), json!("Ada"));
        fields.insert("role".to_string(), json!("engineer"));
        fields
    }

    #[test]
    fn test_resolve_url_joins_relative_targets() {
        let transport = HttpTransport::with_base_url("http://api.test/");
        assert_eq!(transport.resolve_url("/save"), "http://api.test/save");
        assert_eq!(transport.resolve_url("save"), "http://api.test/save");
        assert_eq!(
            transport.resolve_url("https://other.test/x"),
            "https://other.test/x"
        );
    }

    #[test]
    fn test_resolve_url_without_base_is_passthrough() {
        let transport = HttpTransport::new();
        assert_eq!(transport.resolve_url("/save"), "/save");
    }

    #[tokio::test]
    async fn test_post_sends_field_set_as_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/save"))
            .and(body_json(json!({"name": "Ada", "role": "engineer"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"saved": true})))
            .mount(&server)
            .await;

        let transport = HttpTransport::with_base_url(server.uri());
        let mut request = TransportRequest::new(Method::Post, "/save");
        request.body = Some(sample_fields());

        let response = transport.send(request).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.data, json!({"saved": true}));
    }

    #[tokio::test]
    async fn test_get_sends_field_set_as_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("name", "Ada"))
            .and(query_param("role", "engineer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let transport = HttpTransport::with_base_url(server.uri());
        let mut request = TransportRequest::new(Method::Get, "/search");
        request.params = Some(sample_fields());

        let response = transport.send(request).await.unwrap();
        assert_eq!(response.data, json!({"results": []}));
    }

    #[tokio::test]
    async fn test_extra_headers_are_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/save"))
            .and(header("x-api-key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .mount(&server)
            .await;

        let transport = HttpTransport::with_base_url(server.uri());
        let mut request = TransportRequest::new(Method::Post, "/save");
        request
            .headers
            .insert("x-api-key".to_string(), "secret".to_string());

        assert!(transport.send(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_error_status_carries_parsed_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/save"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(json!({"errors": {"email": "invalid"}})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::with_base_url(server.uri());
        let request = TransportRequest::new(Method::Post, "/save");

        let error = transport.send(request).await.unwrap_err();
        assert_eq!(
            error,
            TransportError::Status {
                status: 422,
                data: Some(json!({"errors": {"email": "invalid"}})),
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_with_non_json_body_has_no_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/save"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let transport = HttpTransport::with_base_url(server.uri());
        let request = TransportRequest::new(Method::Post, "/save");

        let error = transport.send(request).await.unwrap_err();
        assert_eq!(
            error,
            TransportError::Status {
                status: 500,
                data: None,
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_connection_failure() {
        let transport = HttpTransport::new();
        let request = TransportRequest::new(Method::Post, "http://127.0.0.1:1/save");

        let error = transport.send(request).await.unwrap_err();
        assert!(matches!(error, TransportError::Connection(_)));
    }
}
