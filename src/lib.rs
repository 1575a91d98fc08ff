//! Treenav - hierarchical navigation menu engine
//!
//! Treenav turns the flat record set of one stored menu into a rendered
//! navigation tree: one retrieval per render, one in-memory build, one
//! active-path resolve. Storage and named-route reversing stay behind
//! ports so the core never issues a second lookup of its own.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod presentation;

// Re-exports for convenience
pub use application::{MenuRender, RenderMenuUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Forest, Node, NodeId};
pub use domain::ports::{MenuSource, NoRoutes, RouteResolver};
pub use domain::services::{ActivePath, TreeBuild, TreeBuildError};
pub use error::{MenuError, MenuResult};
pub use infrastructure::{InMemoryMenuSource, StaticRouteTable, TomlMenuStore};
pub use models::{ItemId, MenuItemRecord, MenuSlug, OrderKey};
pub use presentation::HtmlMenuView;
