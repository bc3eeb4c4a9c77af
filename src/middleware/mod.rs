//! Middleware module
//!
//! This module contains HTTP middleware layered onto the router

pub mod logging;

pub use logging::log_requests;
