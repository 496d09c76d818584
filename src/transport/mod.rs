//! HTTP transport layer.
//!
//! This module provides:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//!
//! Both the public IP resolver and the DNS gateway talk to the network
//! exclusively through [`HttpClient`], so tests can script responses
//! without touching the wire.

mod client;
mod error;
mod http;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
