//! # Pilot
//!
//! The navigation controller. Owns the stack, the view cache and the
//! current presentation chain; nothing else mutates them.
//!
//! ```text
//! push/pop/pop_to/…  ──► Stack ──► reconcile() ──► presentation()
//!                          ▲                            │
//!      dismiss/sync ───────┘◄── host removes a screen ──┘
//! ```
//!
//! Every mutating call runs exactly one reconciliation pass before it
//! returns, so `routes()` and `presentation()` always agree.

use std::fmt;

use crate::core::config::ResolvedConfig;
use crate::core::entry::{EntryId, RouteEntry};
use crate::core::stack::{MatchPolicy, Stack};
use crate::diagnostics::{DiagnosticSink, LogSink, NavEvent, NoopSink};
use crate::present::cache::ViewCache;
use crate::present::chain::{self, Dismissal, PresentationNode};
use crate::present::screen::ScreenRenderer;
use crate::present::sync::{self, HostSignal, Verdict};

/// Construction-time settings for a `Pilot`.
pub struct PilotOptions {
    pub match_policy: MatchPolicy,
    sink: Box<dyn DiagnosticSink>,
}

impl Default for PilotOptions {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::default(),
            sink: Box::new(NoopSink),
        }
    }
}

impl fmt::Debug for PilotOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PilotOptions")
            .field("match_policy", &self.match_policy)
            .finish_non_exhaustive()
    }
}

impl PilotOptions {
    /// `debug = true` selects the `LogSink`.
    pub fn from_resolved(config: &ResolvedConfig) -> Self {
        let options = Self::default().with_match_policy(config.match_policy);
        if config.debug {
            options.with_sink(LogSink)
        } else {
            options
        }
    }

    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }
}

pub struct Pilot<R, F: ScreenRenderer<R>> {
    stack: Stack<R>,
    cache: ViewCache<F::Screen>,
    renderer: F,
    presentation: Option<PresentationNode<F::Screen>>,
    generation: u64,
    match_policy: MatchPolicy,
    sink: Box<dyn DiagnosticSink>,
}

impl<R, F> fmt::Debug for Pilot<R, F>
where
    R: fmt::Debug,
    F: ScreenRenderer<R>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pilot")
            .field("routes", &self.stack.iter().map(RouteEntry::route).collect::<Vec<_>>())
            .field("cached_screens", &self.cache.len())
            .field("generation", &self.generation)
            .field("match_policy", &self.match_policy)
            .finish_non_exhaustive()
    }
}

impl<R, F> Pilot<R, F>
where
    R: PartialEq + fmt::Debug,
    F: ScreenRenderer<R>,
{
    /// A pilot whose stack starts as `[initial]`.
    pub fn new(initial: R, renderer: F) -> Self {
        Self::with_options(Some(initial), renderer, PilotOptions::default())
    }

    /// A pilot with nothing on the stack.
    pub fn empty(renderer: F) -> Self {
        Self::with_options(None, renderer, PilotOptions::default())
    }

    pub fn with_options(initial: Option<R>, renderer: F, options: PilotOptions) -> Self {
        let mut stack = Stack::new();
        if let Some(route) = initial {
            stack.push(RouteEntry::new(route));
        }

        let mut pilot = Self {
            stack,
            cache: ViewCache::new(),
            renderer,
            presentation: None,
            generation: 0,
            match_policy: options.match_policy,
            sink: options.sink,
        };
        pilot.record(NavEvent::Initialized {
            depth: pilot.stack.len(),
        });
        pilot.reconcile();
        pilot
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    pub fn push(&mut self, route: R) {
        let entry = RouteEntry::new(route);
        self.record(NavEvent::Pushed {
            route: format!("{:?}", entry.route()),
            entry: entry.id(),
        });
        self.stack.push(entry);
        self.reconcile();
    }

    /// Removes the top entry. Does nothing on an empty stack.
    pub fn pop(&mut self) {
        self.pop_top();
        self.reconcile();
    }

    /// Pops everything above the entry holding `route`, and that entry too
    /// when `inclusive`. Which occurrence is targeted when the route appears
    /// more than once depends on the pilot's `MatchPolicy`. An absent route
    /// leaves the stack untouched.
    pub fn pop_to(&mut self, route: &R, inclusive: bool) {
        match self.stack.position(route, self.match_policy) {
            Some(index) => {
                let keep = if inclusive { index } else { index + 1 };
                let removed = self.stack.truncate(keep);
                self.record(NavEvent::PopToMatched {
                    route: format!("{route:?}"),
                    index,
                    removed,
                });
            }
            None => self.record(NavEvent::PopToMissed {
                route: format!("{route:?}"),
            }),
        }
        self.reconcile();
    }

    /// Keeps only the bottom entry.
    pub fn pop_to_root(&mut self) {
        let removed = self.stack.truncate(1);
        self.record(NavEvent::PoppedToRoot { removed });
        self.reconcile();
    }

    /// Swaps the bottom entry for a fresh one holding `route`, keeping
    /// everything above it. Pushes when the stack is empty.
    pub fn replace_root(&mut self, route: R) {
        let entry = RouteEntry::new(route);
        self.record(NavEvent::RootReplaced {
            route: format!("{:?}", entry.route()),
            entry: entry.id(),
        });
        self.stack.replace_root(entry);
        self.reconcile();
    }

    // ------------------------------------------------------------------------
    // Host signals
    // ------------------------------------------------------------------------

    /// Called by the host when the screen above a chain node was removed
    /// outside the pilot's control.
    pub fn dismiss(&mut self, dismissal: Dismissal) -> Verdict {
        self.apply(HostSignal::Revealed(dismissal.revealed()))
    }

    /// Called by hosts that track a whole path of entries rather than
    /// per-node dismissals.
    pub fn sync_host_path(&mut self, path: &[EntryId]) -> Verdict {
        self.apply(HostSignal::Path(path))
    }

    fn apply(&mut self, signal: HostSignal<'_>) -> Verdict {
        let verdict = sync::judge(&self.stack, signal);
        match verdict {
            Verdict::Honor => {
                if let Some(revealed) = self.stack.below_top().map(RouteEntry::id) {
                    self.record(NavEvent::SignalHonored { revealed });
                }
                self.pop_top();
                self.reconcile();
            }
            Verdict::Ignore(reason) => self.record(NavEvent::SignalIgnored { reason }),
        }
        verdict
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn route_iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.stack.iter().map(RouteEntry::route)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn top(&self) -> Option<&R> {
        self.stack.top().map(RouteEntry::route)
    }

    pub fn root(&self) -> Option<&R> {
        self.stack.root().map(RouteEntry::route)
    }

    pub fn contains(&self, route: &R) -> bool {
        self.stack.contains(route)
    }

    /// Bottom node of the current chain; `None` when the stack is empty.
    pub fn presentation(&self) -> Option<&PresentationNode<F::Screen>> {
        self.presentation.as_ref()
    }

    /// Number of reconciliation passes run so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cached_screens(&self) -> usize {
        self.cache.len()
    }

    /// Entries that currently have a cached screen, in no particular order.
    pub fn cached_ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.cache.ids()
    }

    pub fn match_policy(&self) -> MatchPolicy {
        self.match_policy
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn pop_top(&mut self) {
        match self.stack.pop() {
            Some(entry) => self.record(NavEvent::Popped {
                route: format!("{:?}", entry.route()),
                entry: entry.id(),
            }),
            None => self.record(NavEvent::PopIgnored),
        }
    }

    fn reconcile(&mut self) {
        self.presentation = chain::reconcile(
            &self.stack,
            &mut self.cache,
            &mut self.renderer,
            self.sink.as_ref(),
        );
        self.generation += 1;
        self.record(NavEvent::Reconciled {
            generation: self.generation,
            depth: self.stack.len(),
        });
    }

    fn record(&self, event: NavEvent) {
        self.sink.record(&event);
    }
}

impl<R, F> Pilot<R, F>
where
    R: PartialEq + Clone + fmt::Debug,
    F: ScreenRenderer<R>,
{
    /// Current route values, bottom first.
    pub fn routes(&self) -> Vec<R> {
        self.stack.routes()
    }
}
