//! HTTP request and response types exchanged with the transport.

mod method;
mod spec;

pub use method::HttpMethod;
pub use spec::{HttpRequest, HttpResponse};
