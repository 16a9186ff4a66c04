//! formwire - form state and submission client for JSON APIs
//!
//! Binds a set of editable form fields to a remote endpoint: field values
//! with an immutable original snapshot, busy/successful lifecycle flags,
//! per-field validation errors normalized from server failure payloads,
//! and a pluggable async transport.
//!
//! ```no_run
//! use formwire::{ClientConfig, FieldMap, Form, SubmissionCoordinator};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), formwire::TransportError> {
//! let mut fields = FieldMap::new();
//! fields.insert("email".to_string(), json!("ada@example.test"));
//! let mut form = Form::new(fields);
//!
//! let coordinator = SubmissionCoordinator::new(ClientConfig::default());
//! match coordinator.post(&mut form, "https://api.example.test/users").await {
//!     Ok(response) => println!("created: {}", response.data),
//!     Err(_) if form.errors().has("email") => {
//!         println!("fix email: {}", form.errors().get("email").unwrap_or_default());
//!     }
//!     Err(error) => return Err(error),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod form;
pub mod routes;
pub mod submit;
pub mod transport;

pub use config::{ClientConfig, DEFAULT_ERROR_MESSAGE};
pub use form::{
    is_reserved, ErrorMap, FieldMap, FieldMessages, Form, FormErrors, GENERIC_ERROR_KEY,
    RESERVED_FIELD_NAMES,
};
pub use routes::RouteTable;
pub use submit::{ErrorPayload, RequestOptions, SubmissionCoordinator};
pub use transport::{
    HttpTransport, Method, ParseMethodError, Transport, TransportError, TransportRequest,
    TransportResponse,
};
