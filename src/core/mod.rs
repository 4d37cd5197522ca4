//! # Core Navigation Logic
//!
//! The route stack and the controller that owns it. Knows nothing about any
//! specific UI toolkit; screens are opaque handles produced by the host.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RouteEntry (identity)│
//!                    │  • Stack (history)      │
//!                    │  • Pilot (controller)   │
//!                    │                         │
//!                    │  No I/O. No UI. Sync.   │
//!                    └───────────┬─────────────┘
//!                                │ reconcile / dismiss
//!                    ┌───────────▼─────────────┐
//!                    │       PRESENT           │
//!                    │  cache • chain • sync   │
//!                    └───────────┬─────────────┘
//!                                ▼
//!                      host UI (any toolkit)
//! ```
//!
//! ## Modules
//!
//! - [`entry`]: `RouteEntry` and its `EntryId`
//! - [`stack`]: the ordered stack and the `pop_to` `MatchPolicy`
//! - [`pilot`]: the public controller
//! - [`config`]: optional TOML settings

pub mod config;
pub mod entry;
pub mod pilot;
pub mod stack;

pub use entry::{EntryId, RouteEntry};
pub use pilot::{Pilot, PilotOptions};
pub use stack::{MatchPolicy, Stack};
