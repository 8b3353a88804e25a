//! Business logic services for News Pulse
//!
//! This crate provides the service layer that drives the analysis pipeline
//! end to end, from candidate retrieval through comparative reporting and
//! audio synthesis.

pub mod report_service;

pub use report_service::{ReportService, ReportServiceConfig, ReportServiceError};
