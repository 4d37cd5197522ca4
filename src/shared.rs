//! # Shared Pilot
//!
//! A `Pilot` is single-threaded: `&mut self` on every mutation is what keeps
//! host pops and programmatic pops from interleaving. Hosts that drive
//! navigation from several threads go through `SharedPilot`, which funnels
//! every call through one lock. The last call to take the lock wins.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::entry::EntryId;
use crate::core::pilot::Pilot;
use crate::present::chain::Dismissal;
use crate::present::screen::ScreenRenderer;
use crate::present::sync::Verdict;

pub struct SharedPilot<R, F: ScreenRenderer<R>> {
    inner: Arc<Mutex<Pilot<R, F>>>,
}

impl<R, F: ScreenRenderer<R>> Clone for SharedPilot<R, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R, F> fmt::Debug for SharedPilot<R, F>
where
    R: fmt::Debug,
    F: ScreenRenderer<R>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedPilot").field(&*self.lock()).finish()
    }
}

impl<R, F: ScreenRenderer<R>> SharedPilot<R, F> {
    pub fn new(pilot: Pilot<R, F>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pilot)),
        }
    }

    // Poisoning is recovered: no pilot operation leaves the stack half-updated.
    fn lock(&self) -> MutexGuard<'_, Pilot<R, F>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R, F> SharedPilot<R, F>
where
    R: PartialEq + fmt::Debug,
    F: ScreenRenderer<R>,
{
    pub fn push(&self, route: R) {
        self.lock().push(route);
    }

    pub fn pop(&self) {
        self.lock().pop();
    }

    pub fn pop_to(&self, route: &R, inclusive: bool) {
        self.lock().pop_to(route, inclusive);
    }

    pub fn pop_to_root(&self) {
        self.lock().pop_to_root();
    }

    pub fn replace_root(&self, route: R) {
        self.lock().replace_root(route);
    }

    pub fn dismiss(&self, dismissal: Dismissal) -> Verdict {
        self.lock().dismiss(dismissal)
    }

    pub fn sync_host_path(&self, path: &[EntryId]) -> Verdict {
        self.lock().sync_host_path(path)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }

    /// Runs `f` against the pilot while holding the lock, e.g. to walk the
    /// presentation chain.
    pub fn with<T>(&self, f: impl FnOnce(&Pilot<R, F>) -> T) -> T {
        f(&self.lock())
    }
}

impl<R, F> SharedPilot<R, F>
where
    R: PartialEq + Clone + fmt::Debug,
    F: ScreenRenderer<R>,
{
    pub fn routes(&self) -> Vec<R> {
        self.lock().routes()
    }
}
