//! # Presentation
//!
//! The host-facing half of the engine: turning the stack into something a
//! UI can draw, and folding the UI's own removals back into the stack.
//!
//! - [`screen`]: the `ScreenRenderer` seam the host implements
//! - [`cache`]: identity-keyed screen reuse
//! - [`chain`]: the reconciliation pass and the presentation chain
//! - [`sync`]: the predicate deciding which host removals count

pub mod cache;
pub mod chain;
pub mod screen;
pub mod sync;

pub use cache::ViewCache;
pub use chain::{Dismissal, PresentationNode, reconcile};
pub use screen::ScreenRenderer;
pub use sync::{HostSignal, Verdict};
