//! # Route Stack
//!
//! The ordered list of live entries, bottom (root) first. Only the `Pilot`
//! mutates it; everything else gets `&Stack`.

use serde::{Deserialize, Serialize};

use super::entry::{EntryId, RouteEntry};

/// Which occurrence `pop_to` targets when a route appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// The top-most occurrence (closest to the visible screen).
    Nearest,
    /// The bottom-most occurrence (closest to the root).
    #[default]
    Farthest,
}

#[derive(Debug, Clone)]
pub struct Stack<R> {
    entries: Vec<RouteEntry<R>>,
}

impl<R> Default for Stack<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Stack<R> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self) -> Option<&RouteEntry<R>> {
        self.entries.last()
    }

    pub fn root(&self) -> Option<&RouteEntry<R>> {
        self.entries.first()
    }

    /// The entry directly beneath the top, if any.
    pub fn below_top(&self) -> Option<&RouteEntry<R>> {
        self.entries.len().checked_sub(2).map(|i| &self.entries[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry<R>> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.entries.iter().map(RouteEntry::id)
    }

    pub fn contains_id(&self, id: EntryId) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    pub(crate) fn push(&mut self, entry: RouteEntry<R>) {
        self.entries.push(entry);
    }

    pub(crate) fn pop(&mut self) -> Option<RouteEntry<R>> {
        self.entries.pop()
    }

    /// Drops every entry at index `len` and above. Returns how many went.
    pub(crate) fn truncate(&mut self, len: usize) -> usize {
        let removed = self.entries.len().saturating_sub(len);
        self.entries.truncate(len);
        removed
    }

    /// Swaps the bottom entry for `entry`, returning the old one.
    /// On an empty stack the entry is simply pushed.
    pub(crate) fn replace_root(&mut self, entry: RouteEntry<R>) -> Option<RouteEntry<R>> {
        match self.entries.first_mut() {
            Some(slot) => Some(std::mem::replace(slot, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }
}

impl<R: PartialEq> Stack<R> {
    /// Index of the entry holding `route`, chosen according to `policy`.
    pub fn position(&self, route: &R, policy: MatchPolicy) -> Option<usize> {
        let matches = |e: &RouteEntry<R>| e.route() == route;
        match policy {
            MatchPolicy::Nearest => self.entries.iter().rposition(matches),
            MatchPolicy::Farthest => self.entries.iter().position(matches),
        }
    }

    pub fn contains(&self, route: &R) -> bool {
        self.entries.iter().any(|e| e.route() == route)
    }
}

impl<R: Clone> Stack<R> {
    pub fn routes(&self) -> Vec<R> {
        self.entries.iter().map(|e| e.route().clone()).collect()
    }
}
