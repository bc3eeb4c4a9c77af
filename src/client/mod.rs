//! HTTP client for the StovaSpot API

pub mod api;

pub use api::ApiClient;
