//! Storage module for durable tracker state.

pub mod store;

pub use store::{JsonStore, StoreError, TrackerStore};
