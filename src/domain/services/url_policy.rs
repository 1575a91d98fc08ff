//! Effective-URL policy
//!
//! A record's navigable path: named route first, literal URL second,
//! placeholder last. Resolution runs on every call so route table changes
//! show up without touching stored records.

use std::borrow::Cow;

use crate::domain::ports::RouteResolver;
use crate::models::MenuItemRecord;

/// Href emitted for items with no resolvable destination
pub const PLACEHOLDER_HREF: &str = "#";

/// Resolve the navigable path for one record.
///
/// An unresolvable named route is not an error; it silently falls back to
/// the literal `url`, and an absent or empty `url` falls back to the
/// placeholder.
pub fn effective_url<'r>(record: &'r MenuItemRecord, routes: &dyn RouteResolver) -> Cow<'r, str> {
    if let Some(name) = &record.named_route {
        if let Some(path) = routes.resolve(name) {
            return Cow::Owned(path);
        }
    }
    match &record.url {
        Some(url) if !url.is_empty() => Cow::Borrowed(url.as_str()),
        _ => Cow::Borrowed(PLACEHOLDER_HREF),
    }
}
