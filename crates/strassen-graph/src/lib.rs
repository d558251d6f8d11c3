//! # strassen-graph
//!
//! Triangle counting for Strassen-rs. Random undirected graphs are built as
//! 0/1 adjacency matrices and their triangles are read off the trace of the
//! adjacency cube, with independent trials spread over the rayon pool.

pub mod adjacency;
pub mod triangles;

pub use adjacency::{complete_adjacency, edge_count, random_adjacency};
pub use triangles::{
    count_triangles, estimate_triangles, expected_triangles, TriangleConfig, TriangleEstimate,
};
