//! Transport board boundary.
//!
//! The engine only needs adjacency queries: which edges leave a node and
//! what transport each one carries. Anything implementing `Board` can host
//! a game. `TransportGraph` is a plain adjacency-list implementation.

pub mod graph;

pub use graph::{Board, Edge, TransportGraph};
