//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::pilot::{Pilot, PilotOptions};
use crate::diagnostics::RecordingSink;
use crate::present::screen::ScreenRenderer;

/// Screen handle produced by `CountingRenderer`. `serial` is unique per
/// render call, so two handles with the same serial came from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestScreen<R> {
    pub route: R,
    pub serial: usize,
}

/// Renderer that counts its calls. Clones share the counter.
#[derive(Debug, Default, Clone)]
pub struct CountingRenderer {
    calls: Arc<AtomicUsize>,
}

impl CountingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<R: Clone> ScreenRenderer<R> for CountingRenderer {
    type Screen = TestScreen<R>;

    fn render(&mut self, route: &R) -> TestScreen<R> {
        let serial = self.calls.fetch_add(1, Ordering::SeqCst);
        TestScreen {
            route: route.clone(),
            serial,
        }
    }
}

/// A pilot over string routes with a counting renderer and a recording sink.
/// Returns handles to the renderer counter and the sink.
pub fn test_pilot(
    routes: &[&'static str],
) -> (Pilot<&'static str, CountingRenderer>, CountingRenderer, RecordingSink) {
    let renderer = CountingRenderer::new();
    let sink = RecordingSink::new();
    let options = PilotOptions::default().with_sink(sink.clone());

    let mut iter = routes.iter().copied();
    let mut pilot = Pilot::with_options(iter.next(), renderer.clone(), options);
    for route in iter {
        pilot.push(route);
    }
    (pilot, renderer, sink)
}
