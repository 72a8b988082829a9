//! Data access layer for the regional databases.
//!
//! Contains the SQL statements of every region, the raw row types they decode
//! into and the repository performing one connection-scoped query per call.

pub mod query;
pub mod region;
pub mod row;
