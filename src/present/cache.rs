//! # View Cache
//!
//! Screens keyed by entry identity. Two pushes of the same route get two
//! screens, each with its own UI state.
//!
//! Retention is strict: after `retain_live` the keys are exactly the ids on
//! the stack. No LRU, no grace period.

use std::collections::HashMap;

use crate::core::entry::EntryId;
use crate::core::stack::Stack;

#[derive(Debug, Clone)]
pub struct ViewCache<S> {
    screens: HashMap<EntryId, S>,
}

impl<S> Default for ViewCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ViewCache<S> {
    pub fn new() -> Self {
        Self {
            screens: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.screens.contains_key(&id)
    }

    pub fn get(&self, id: EntryId) -> Option<&S> {
        self.screens.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.screens.keys().copied()
    }

    pub(crate) fn insert(&mut self, id: EntryId, screen: S) {
        self.screens.insert(id, screen);
    }

    /// Drops every screen whose entry is no longer on `stack`.
    /// Returns the evicted ids.
    pub(crate) fn retain_live<R>(&mut self, stack: &Stack<R>) -> Vec<EntryId> {
        let mut evicted = Vec::new();
        self.screens.retain(|id, _| {
            let live = stack.contains_id(*id);
            if !live {
                evicted.push(*id);
            }
            live
        });
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::RouteEntry;

    #[test]
    fn test_retain_live_evicts_only_dead_entries() {
        let mut stack = Stack::new();
        let kept = RouteEntry::new("home");
        let kept_id = kept.id();
        stack.push(kept);

        let mut cache = ViewCache::new();
        cache.insert(kept_id, "home screen");
        let gone = RouteEntry::new("gone");
        cache.insert(gone.id(), "stale");

        let evicted = cache.retain_live(&stack);
        assert_eq!(evicted, vec![gone.id()]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(kept_id), Some(&"home screen"));
    }

    #[test]
    fn test_retain_live_on_empty_stack_clears() {
        let stack: Stack<&str> = Stack::new();
        let mut cache = ViewCache::new();
        cache.insert(RouteEntry::new("a").id(), 1);
        cache.insert(RouteEntry::new("b").id(), 2);
        assert_eq!(cache.retain_live(&stack).len(), 2);
        assert!(cache.is_empty());
    }
}
