//! Domain Services
//!
//! Pure services over the record set and the built forest. No I/O happens
//! here: records come in as values and route lookups go through the
//! `RouteResolver` port.

pub mod active_path;
pub mod tree_builder;
pub mod url_policy;

pub use active_path::ActivePath;
pub use tree_builder::{TreeBuild, TreeBuildError};
pub use url_policy::{effective_url, PLACEHOLDER_HREF};
