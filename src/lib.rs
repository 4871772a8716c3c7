//! LMS API smoke-test harness
//!
//! Walks an LMS backend's HTTP API in a fixed narrative order, threading
//! tokens and created IDs from one request into the next, and prints every
//! request/response pair for a developer to read.

pub mod client;
pub mod common;
pub mod scenario;
pub mod session;

// Re-export commonly used types for tests
pub use client::{ApiClient, ApiResponse, Method};
pub use common::{Error, Result};
pub use scenario::{Phase, RunSummary, Runner, ScenarioContext};
