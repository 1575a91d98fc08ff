//! Static route table
//!
//! `RouteResolver` over a plain name-to-path map, normally the `[routes]`
//! section of the project config. Stands in for a framework routing
//! table; lookups are pure and side-effect free.

use std::collections::BTreeMap;

use crate::domain::ports::RouteResolver;

#[derive(Debug, Clone, Default)]
pub struct StaticRouteTable {
    routes: BTreeMap<String, String>,
}

impl StaticRouteTable {
    pub fn new(routes: BTreeMap<String, String>) -> Self {
        Self { routes }
    }

    pub fn with_route(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.routes.insert(name.into(), path.into());
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteResolver for StaticRouteTable {
    fn resolve(&self, name: &str) -> Option<String> {
        self.routes.get(name).cloned()
    }
}
