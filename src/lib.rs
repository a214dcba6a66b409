//! Sales and enrollment backend for an educational institution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API tracks leads through the enrollment pipeline, the course
//! catalog, matriculations, and grades. Data lives in a hosted relational
//! store reached over its REST query API; when that store is unconfigured
//! or unreachable, reads transparently serve a built-in fixture dataset so
//! the dashboard keeps working. Writes against a configured store are never
//! masked.

pub mod fixtures;
pub mod labels;
pub mod model;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
