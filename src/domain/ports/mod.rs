//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer. Storage and
//! route reversing live behind them; the core never calls either
//! directly.

mod menu_source;
mod route_resolver;

pub use menu_source::MenuSource;
pub use route_resolver::{NoRoutes, RouteResolver};
