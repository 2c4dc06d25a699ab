//! Purchase submission over HTTP.

pub mod http;

pub use http::HttpPurchaseGateway;
