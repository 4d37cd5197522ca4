//! # Route Entries
//!
//! A `RouteEntry` is one occurrence of a route in the stack. The route value
//! is whatever the caller pushed; the `EntryId` is minted on construction and
//! has nothing to do with the route's value.
//!
//! ```text
//! push(Detail) ──► RouteEntry { id: 7f3c…, route: Detail }
//! push(Detail) ──► RouteEntry { id: 0a91…, route: Detail }   // same route, new entry
//! ```

use std::fmt;

use uuid::Uuid;

/// Process-unique identity of a single push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First 8 hex chars are plenty for log lines.
        let full = self.0.simple().to_string();
        write!(f, "{}", &full[..8])
    }
}

/// An identity-wrapped route value.
#[derive(Debug, Clone)]
pub struct RouteEntry<R> {
    id: EntryId,
    route: R,
}

impl<R> RouteEntry<R> {
    pub fn new(route: R) -> Self {
        Self {
            id: EntryId::new(),
            route,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn route(&self) -> &R {
        &self.route
    }
}

/// Entries compare by identity only.
impl<R> PartialEq for RouteEntry<R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<R> Eq for RouteEntry<R> {}
