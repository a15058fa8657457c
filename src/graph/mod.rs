//! Directed graph addressed through owner-validated handles
//!
//! This module implements:
//! - Opaque vertex and edge handles tied to one graph instance and one
//!   lifetime of their element
//! - Incidence-list storage with insertion-ordered iteration
//! - By-value vertex deduplication and one edge per ordered pair
//! - Per-handle label slots kept apart from structural data

mod arena;
mod display;
mod edge;
pub mod label;
pub mod store;
pub mod types;
mod vertex;

// Re-export main types
pub use label::Label;
pub use store::{ErrorKind, Graph, GraphError, GraphResult};
pub use types::{EdgeHandle, GraphId, VertexHandle};
