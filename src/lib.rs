//! Artist profile aggregation and enrichment pipeline.
//!
//! Raw event-attendance logs are collapsed into unique artist profiles,
//! exported as a nested enrichment template, and merged back once an external
//! provider fills the placeholders. Stages hand off only through these
//! artifacts; there is no shared state between them.

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod merge;
pub mod paths;
pub mod provider;
pub mod schema;
pub mod store;
pub mod template;
pub mod workflow;
