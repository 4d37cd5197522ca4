//! Waypoint: a navigation-stack controller for host UIs.
//!
//! Application code pushes and pops opaque route values on a [`Pilot`]; the
//! pilot keeps one screen per stack entry, rebuilds the presentation chain
//! after every change, and folds back-navigations the host performs on its
//! own into the stack.
//!
//! ```
//! use waypoint::Pilot;
//!
//! let mut pilot = Pilot::new("home", |route: &&str| format!("<{route}>"));
//! pilot.push("detail");
//! pilot.push("detail");
//! pilot.pop_to(&"detail", false);
//! assert_eq!(pilot.routes(), vec!["home", "detail"]);
//!
//! let top = pilot.presentation().map(|root| root.top().screen().clone());
//! assert_eq!(top.as_deref(), Some("<detail>"));
//! ```

pub mod core;
pub mod diagnostics;
pub mod present;
pub mod shared;

#[cfg(test)]
pub mod test_support;

pub use crate::core::config::{ConfigError, ResolvedConfig, WaypointConfig, load_config, resolve};
pub use crate::core::{EntryId, MatchPolicy, Pilot, PilotOptions};
pub use crate::diagnostics::{DiagnosticSink, IgnoreReason, LogSink, NavEvent, NoopSink, RecordingSink};
pub use crate::present::{Dismissal, HostSignal, PresentationNode, ScreenRenderer, Verdict};
pub use crate::shared::SharedPilot;
