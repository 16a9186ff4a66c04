//! Transport module for HTTP communication

mod http;
mod traits;

pub use http::HttpTransport;
pub use traits::{
    Method, ParseMethodError, Transport, TransportError, TransportRequest, TransportResponse,
};

#[cfg(test)]
pub use traits::MockTransport;
