//! Test helpers module
//!
//! This module provides utilities and helpers for testing the StovaSpot application.
//! It includes an in-process API server, database helpers and test data.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_data;
pub mod test_server;

pub use database_helper::*;
pub use test_data::*;
pub use test_server::*;
