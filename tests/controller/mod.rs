//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying range validation, region lookup, fail-closed behavior of unconfigured
//! regions and the response envelopes of every API endpoint.

mod absence;
mod dashboard;
mod event;
mod router;

use crate::setup::*;
