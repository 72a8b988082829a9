//! Data transfer objects shared by the HTTP API and its consumers.
//!
//! These are the canonical shapes every region's records are normalized into,
//! plus the metrics and response envelopes built on top of them.

pub mod api;
pub mod ausencia;
pub mod dashboard;
pub mod filter;
pub mod metrics;
pub mod novedad;
pub mod range;
pub mod record;
