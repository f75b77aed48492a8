//! Top-level routed pages.

pub mod store;
