//! # Reconciliation
//!
//! Derives the presentation chain from the stack and the view cache.
//!
//! ```text
//! Stack:  [Home, List, Detail]
//!
//! Chain:  Home ──next──► List ──next──► Detail
//!          │              │
//!          └ dismissal    └ dismissal       (fires when the screen above is removed)
//! ```
//!
//! The chain is rebuilt on every pass and owns nothing but cloned screen
//! handles. A stale chain can be dropped at any time; it never points back
//! into the `Pilot`.

use crate::core::entry::EntryId;
use crate::core::stack::Stack;
use crate::diagnostics::{DiagnosticSink, NavEvent};
use crate::present::cache::ViewCache;
use crate::present::screen::ScreenRenderer;

/// Token a host hands back to `Pilot::dismiss` when the screen presented
/// on top of a node goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismissal {
    revealed: EntryId,
}

impl Dismissal {
    pub fn new(revealed: EntryId) -> Self {
        Self { revealed }
    }

    /// The entry that becomes visible once the screen above it is gone.
    pub fn revealed(&self) -> EntryId {
        self.revealed
    }
}

/// One screen in the chain, plus whatever is presented on top of it.
#[derive(Debug, Clone)]
pub struct PresentationNode<S> {
    entry: EntryId,
    screen: S,
    next: Option<Box<PresentationNode<S>>>,
}

impl<S> PresentationNode<S> {
    pub fn entry_id(&self) -> EntryId {
        self.entry
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn next(&self) -> Option<&PresentationNode<S>> {
        self.next.as_deref()
    }

    /// Only nodes with something on top of them can observe a dismissal.
    pub fn dismissal(&self) -> Option<Dismissal> {
        self.next.as_ref().map(|_| Dismissal::new(self.entry))
    }

    /// Walks from this node to the top of the chain.
    pub fn iter(&self) -> Chain<'_, S> {
        Chain { node: Some(self) }
    }

    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    /// The visible screen.
    pub fn top(&self) -> &PresentationNode<S> {
        let mut node = self;
        while let Some(next) = node.next() {
            node = next;
        }
        node
    }
}

pub struct Chain<'a, S> {
    node: Option<&'a PresentationNode<S>>,
}

impl<'a, S> Iterator for Chain<'a, S> {
    type Item = &'a PresentationNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next();
        Some(node)
    }
}

/// Runs one reconciliation pass.
///
/// 1. Evicts cached screens whose entries left the stack.
/// 2. Walks the stack top to bottom, reusing cached screens and rendering
///    the rest, linking each node to the one above it.
///
/// Returns the bottom-most node, or `None` for an empty stack. Running it
/// again on an unchanged stack renders nothing.
pub fn reconcile<R, F>(
    stack: &Stack<R>,
    cache: &mut ViewCache<F::Screen>,
    renderer: &mut F,
    sink: &dyn DiagnosticSink,
) -> Option<PresentationNode<F::Screen>>
where
    F: ScreenRenderer<R>,
{
    for entry in cache.retain_live(stack) {
        sink.record(&NavEvent::Evicted { entry });
    }

    let mut current: Option<PresentationNode<F::Screen>> = None;
    for entry in stack.iter().rev() {
        let id = entry.id();
        let screen = if let Some(screen) = cache.get(id).cloned() {
            sink.record(&NavEvent::CacheHit { entry: id });
            screen
        } else {
            let screen = renderer.render(entry.route());
            cache.insert(id, screen.clone());
            sink.record(&NavEvent::Rendered { entry: id });
            screen
        };

        current = Some(PresentationNode {
            entry: id,
            screen,
            next: current.map(Box::new),
        });
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::RouteEntry;
    use crate::diagnostics::{NoopSink, RecordingSink};
    use crate::test_support::{CountingRenderer, TestScreen};

    fn stack_of(routes: &[&'static str]) -> Stack<&'static str> {
        let mut stack = Stack::new();
        for r in routes {
            stack.push(RouteEntry::new(*r));
        }
        stack
    }

    #[test]
    fn test_chain_mirrors_stack_order() {
        let stack = stack_of(&["home", "list", "detail"]);
        let mut cache = ViewCache::new();
        let mut renderer = CountingRenderer::new();

        let root = reconcile(&stack, &mut cache, &mut renderer, &NoopSink).unwrap();
        let screens: Vec<&str> = root.iter().map(|n| n.screen().route).collect();
        assert_eq!(screens, vec!["home", "list", "detail"]);

        let ids: Vec<EntryId> = root.iter().map(PresentationNode::entry_id).collect();
        assert_eq!(ids, stack.ids().collect::<Vec<_>>());
        assert_eq!(root.depth(), 3);
        assert_eq!(root.top().screen().route, "detail");
    }

    #[test]
    fn test_only_covered_nodes_offer_dismissal() {
        let stack = stack_of(&["home", "detail"]);
        let mut cache = ViewCache::new();
        let mut renderer = CountingRenderer::new();

        let root = reconcile(&stack, &mut cache, &mut renderer, &NoopSink).unwrap();
        let root_id = stack.root().map(RouteEntry::id).unwrap();
        assert_eq!(root.dismissal().map(|d| d.revealed()), Some(root_id));
        assert!(root.top().dismissal().is_none());
    }

    #[test]
    fn test_second_pass_hits_cache() {
        let stack = stack_of(&["home", "detail"]);
        let mut cache = ViewCache::new();
        let mut renderer = CountingRenderer::new();
        let sink = RecordingSink::new();

        let first = reconcile(&stack, &mut cache, &mut renderer, &sink).unwrap();
        assert_eq!(renderer.calls(), 2);
        sink.take();

        let second = reconcile(&stack, &mut cache, &mut renderer, &sink).unwrap();
        assert_eq!(renderer.calls(), 2);
        assert!(
            sink.events()
                .iter()
                .all(|e| matches!(e, NavEvent::CacheHit { .. }))
        );

        let serials = |n: &PresentationNode<TestScreen<&'static str>>| {
            n.iter().map(|n| n.screen().serial).collect::<Vec<_>>()
        };
        assert_eq!(serials(&first), serials(&second));
    }

    #[test]
    fn test_duplicate_routes_render_separately() {
        let stack = stack_of(&["home", "detail", "detail"]);
        let mut cache = ViewCache::new();
        let mut renderer = CountingRenderer::new();

        let root = reconcile(&stack, &mut cache, &mut renderer, &NoopSink).unwrap();
        assert_eq!(renderer.calls(), 3);
        let serials: Vec<usize> = root.iter().map(|n| n.screen().serial).collect();
        assert_ne!(serials[1], serials[2]);
    }

    #[test]
    fn test_empty_stack_has_no_chain_and_clears_cache() {
        let mut stack = stack_of(&["home"]);
        let mut cache = ViewCache::new();
        let mut renderer = CountingRenderer::new();
        reconcile(&stack, &mut cache, &mut renderer, &NoopSink);
        assert_eq!(cache.len(), 1);

        stack.pop();
        assert!(reconcile(&stack, &mut cache, &mut renderer, &NoopSink).is_none());
        assert!(cache.is_empty());
    }
}
