//! # VELORA Console Core
//!
//! The non-visual core of the VELORA admin console: startup wiring, route
//! admission control, async view-state slots and form policy. A UI shell
//! (desktop or embedded web view) renders on top of this crate; nothing in
//! here draws.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use velora_console::{Console, Decision, View};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     velora_common::logging::init_default_logging();
//!
//!     let console = Console::bootstrap()?;
//!     match console.guard().decide(View::Dashboard) {
//!         Decision::Render(view) => println!("render {:?}", view),
//!         Decision::Redirect(target) => println!("redirect to {:?}", target),
//!         Decision::Hold => println!("still restoring the session"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod guard;
pub mod policy;
pub mod slot;

pub use bootstrap::{Console, ConsoleError};
pub use guard::{Admission, Decision, RouteGuard, Target, View, LANDING};
pub use policy::{validate_new_admin, validate_password, PolicyViolation};
pub use slot::{SlotState, Ticket, ViewSlot};
