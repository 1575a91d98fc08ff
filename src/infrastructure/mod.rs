//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports: the TOML-backed menu
//! store, an in-memory source for tests and embedders, and the static
//! route table built from project configuration.

mod memory_source;
mod static_routes;
mod toml_store;

pub use memory_source::InMemoryMenuSource;
pub use static_routes::StaticRouteTable;
pub use toml_store::{MenusDocument, StoredItem, StoredMenu, TomlMenuStore};
