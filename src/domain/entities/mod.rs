//! Domain Entities

mod forest;

pub use forest::{Ancestors, Forest, Node, NodeId, Preorder};
