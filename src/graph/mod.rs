//! Undirected weighted graph and traversal.
//!
//! - [`Graph`] — label-keyed adjacency lists over a node arena
//! - [`Node`], [`Edge`] — vertex and edge records behind [`NodeId`] / [`EdgeId`] handles
//! - [`Traversal`] — breadth-first, iterative and recursive depth-first sweeps

mod adjacency;
mod edge;
mod node;
mod traversal;

pub use adjacency::Graph;
pub use edge::{Edge, EdgeId, Weight};
pub use node::{Node, NodeId};
pub use traversal::Traversal;
