//! Triage Client - HTTP access to the symptom-analysis backend
//!
//! This crate provides the wire contract and client for Triage:
//! - Client: one-shot `POST /analyze` plus banner and health checks
//! - Config: base URL and timeout, from builders or environment
//! - Report: the four-field analysis payload, lenient on missing fields
//! - Error: transport/API/timeout/parse variants, all collapsing to one
//!   fixed user-facing message

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod report;

pub use client::AnalysisClient;
pub use config::BackendConfig;
pub use error::{Error, Result};
pub use report::{AnalysisReport, AnalyzeRequest, HealthStatus, ServerStatus};
