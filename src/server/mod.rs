//! Server application core modules.
//!
//! This module contains all server-side functionality of Panorama: the declarative
//! region table, per-region data access, row normalization, multi-region
//! aggregation, dashboard metrics and the HTTP API exposing them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod region;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
