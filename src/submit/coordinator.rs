//! Submission protocol: lifecycle flags, payload placement, and error
//! reconciliation

use crate::config::ClientConfig;
use crate::form::Form;
use crate::submit::payload::ErrorPayload;
use crate::transport::{
    HttpTransport, Method, Transport, TransportError, TransportRequest, TransportResponse,
};
use indexmap::IndexMap;
use std::sync::Arc;

/// Extra per-request options merged into the transport request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Additional request headers
    pub headers: IndexMap<String, String>,
}

impl RequestOptions {
    /// Options with a single extra header
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers = IndexMap::new();
        headers.insert(name.into(), value.into());
        Self { headers }
    }
}

/// Drives one logical submission attempt end-to-end and reconciles the
/// outcome into the form's flags and error store.
///
/// The transport is injected at construction; there is no process-wide
/// default. One [`submit`](Self::submit) call issues exactly one request:
/// no retry, coalescing, or cancellation. Overlapping submissions are not
/// serialized here; callers gate on [`Form::busy`] at a higher layer.
pub struct SubmissionCoordinator {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl SubmissionCoordinator {
    /// Coordinator over the default HTTP transport
    pub fn new(config: ClientConfig) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
            config,
        }
    }

    /// Coordinator over an injected transport
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Submit the form's field set to `url`.
    ///
    /// Errors are cleared and the busy flag raised strictly before the
    /// transport is invoked. On success the raw response is returned
    /// unmodified; on failure any response payload is normalized into the
    /// form's error store and the original failure is returned unchanged.
    pub async fn submit(
        &self,
        form: &mut Form,
        method: Method,
        url: &str,
    ) -> Result<TransportResponse, TransportError> {
        self.submit_with(form, method, url, RequestOptions::default())
            .await
    }

    /// Submit with extra per-request options
    pub async fn submit_with(
        &self,
        form: &mut Form,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        form.start_processing();

        let mut request = TransportRequest::new(method, url);
        if method.sends_params() {
            request.params = Some(form.data());
        } else {
            request.body = Some(form.data());
        }
        request.headers = options.headers;

        tracing::debug!("submitting form via {method} to {url}");
        match self.transport.send(request).await {
            Ok(response) => {
                form.finish_processing();
                Ok(response)
            }
            Err(error) => {
                tracing::warn!("form submission to {url} failed: {error}");
                let errors = match &error {
                    TransportError::Status { data, .. } => Some(
                        ErrorPayload::classify(data.as_ref())
                            .into_error_map(&self.config.error_message),
                    ),
                    TransportError::Connection(_) => None,
                };
                form.fail_processing(errors);
                Err(error)
            }
        }
    }

    /// Shorthand for [`submit`](Self::submit) with [`Method::Get`]
    pub async fn get(
        &self,
        form: &mut Form,
        url: &str,
    ) -> Result<TransportResponse, TransportError> {
        self.submit(form, Method::Get, url).await
    }

    /// Shorthand for [`submit`](Self::submit) with [`Method::Post`]
    pub async fn post(
        &self,
        form: &mut Form,
        url: &str,
    ) -> Result<TransportResponse, TransportError> {
        self.submit(form, Method::Post, url).await
    }

    /// Shorthand for [`submit`](Self::submit) with [`Method::Put`]
    pub async fn put(
        &self,
        form: &mut Form,
        url: &str,
    ) -> Result<TransportResponse, TransportError> {
        self.submit(form, Method::Put, url).await
    }

    /// Shorthand for [`submit`](Self::submit) with [`Method::Patch`]
    pub async fn patch(
        &self,
        form: &mut Form,
        url: &str,
    ) -> Result<TransportResponse, TransportError> {
        self.submit(form, Method::Patch, url).await
    }

    /// Shorthand for [`submit`](Self::submit) with [`Method::Delete`]
    pub async fn delete(
        &self,
        form: &mut Form,
        url: &str,
    ) -> Result<TransportResponse, TransportError> {
        self.submit(form, Method::Delete, url).await
    }
}
