//! Adapters implementing the outbound ports.

pub mod dag_store;

pub use dag_store::InMemoryDagStore;
