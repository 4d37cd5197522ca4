//! # Host Sync
//!
//! Host UIs can remove a screen on their own (edge swipe, hardware back).
//! They report it here, and the stack follows only when the report has the
//! shape of a single back navigation:
//!
//! ```text
//! Stack [A, B, C]
//!   revealed B          → honor, pop C
//!   revealed C          → ignore (already on top; echo of our own pop)
//!   revealed A          → ignore (not a single pop)
//!   path [A, B]         → honor
//!   path [A]            → ignore
//! ```
//!
//! Everything else is dropped silently. A host signal never gets to shrink
//! the stack by more than one entry.

use crate::core::entry::EntryId;
use crate::core::stack::Stack;
use crate::diagnostics::IgnoreReason;

/// What the host says just happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal<'a> {
    /// The screen for this entry is visible again.
    Revealed(EntryId),
    /// The full list of entries the host now displays, bottom first.
    Path(&'a [EntryId]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Exactly the top entry was removed: pop it.
    Honor,
    Ignore(IgnoreReason),
}

/// Decides whether `signal` describes the top entry of `stack` being
/// removed by the host.
pub fn judge<R>(stack: &Stack<R>, signal: HostSignal<'_>) -> Verdict {
    let Some(top) = stack.top() else {
        return Verdict::Ignore(IgnoreReason::EmptyStack);
    };

    match signal {
        HostSignal::Revealed(revealed) => {
            if top.id() == revealed {
                Verdict::Ignore(IgnoreReason::AlreadyTop)
            } else if stack.below_top().is_some_and(|e| e.id() == revealed) {
                Verdict::Honor
            } else {
                Verdict::Ignore(IgnoreReason::ShapeMismatch)
            }
        }
        HostSignal::Path(path) => {
            if path.len() == stack.len() && stack.ids().eq(path.iter().copied()) {
                Verdict::Ignore(IgnoreReason::AlreadyTop)
            } else if stack.len() >= 2
                && path.len() + 1 == stack.len()
                && stack.ids().zip(path.iter().copied()).all(|(a, b)| a == b)
            {
                Verdict::Honor
            } else {
                Verdict::Ignore(IgnoreReason::ShapeMismatch)
            }
        }
    }
}
