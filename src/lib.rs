//! Confirm Dialog - a reusable confirmation prompt control for
//! server-rendered UIs.
//!
//! Multiple independent confirmation flows ("confirmers") are registered
//! under distinct names on one [`DialogController`], each with its own
//! handler, heading, and question (literal text or computed from the
//! activation parameters). Inbound dynamic signals of the form
//! `confirm<Name>` route through one dispatcher and back to the registered
//! flow; on confirmation the bound handler runs with the parameters the
//! prompt was shown for.
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use confirm_dialog::{DialogController, Params};
//!
//! # fn main() -> confirm_dialog::Result<()> {
//! let mut dialog = DialogController::with_default_factory();
//! dialog.add_confirmer(
//!     "logout",
//!     Rc::new(|_params: &Params| { /* end the session */ }),
//!     "Log out now?",
//!     "Confirm",
//! )?;
//!
//! dialog.dispatch_signal("confirmLogout", Params::new())?;
//! if let Some(active) = dialog.active() {
//!     assert_eq!(active.resolved_question(), "Log out now?");
//!     active.confirm();
//! }
//! dialog.reset();
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The host framework (component tree, routing, template engine,
//! transport) stays outside this crate. The controller translates inbound
//! signals into registry lookups and instance activation, and
//! [`DialogController::render`] produces a plain snapshot — name, heading,
//! question, params, AJAX flag, template paths — that the host view layer
//! turns into markup. One controller lives per request; everything is
//! synchronous and single-threaded, so handlers are plain `Rc<dyn Fn>`
//! callbacks with no `Send` bound.

pub mod config;
pub mod controller;
pub mod errors;
pub mod instance;
pub mod registry;
pub mod signal;


// Convenience re-exports
pub use config::DialogConfig;
pub use controller::{
    ConfirmerFactory, ConfirmerSnapshot, DialogController, DialogRender, DEFAULT_LAYOUT_FILE,
    DEFAULT_TEMPLATE_FILE,
};
pub use errors::{DialogError, Result};
pub use instance::ConfirmerInstance;
pub use registry::{
    ConfirmHandler, ConfirmerDefinition, ConfirmerRegistry, Lookup, Params, TextFn, TextSource,
};
pub use signal::{decode_signal, encode_signal, SIGNAL_PREFIX};
