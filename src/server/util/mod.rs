//! Utility helpers for server tests.
//!
//! Row factories and in-memory regional sources used by the unit tests of the
//! normalizer, aggregator and dashboard services.
