//! Service layer for aggregation and metrics.
//!
//! Services turn raw regional rows into canonical records, fan requests out to
//! every region, resolve the absence type catalog and derive dashboard metrics.
//! They depend on the [`source::RegionSource`] seam rather than on databases so
//! they can be exercised with in-memory sources.

pub mod absence_type;
pub mod aggregate;
pub mod dashboard;
pub mod metrics;
pub mod normalize;
pub mod source;
