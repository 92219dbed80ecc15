//! Error taxonomy for the confirmation dialog control.
//!
//! Every operation reports failure synchronously to its immediate caller;
//! nothing is swallowed or retried. The host request layer decides how a
//! failure is surfaced to the user.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DialogError>;

/// Errors raised by registry, instance, and controller operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    /// Confirmer name fails `[A-Za-z_]+` validation at registration.
    #[error("confirmer name `{0}` contains invalid characters")]
    InvalidName(String),

    /// Confirmer name is already registered.
    #[error("confirmer `{0}` is already registered")]
    DuplicateName(String),

    /// Confirmer is absent from the registry, or present but unconfigured.
    /// The two causes are deliberately indistinguishable to the caller.
    #[error("confirmer `{0}` does not exist")]
    NotFound(String),

    /// Second attempt to configure an already configured confirmer.
    #[error("confirmer `{0}` is already configured")]
    AlreadyConfigured(String),

    /// Activation attempted on an unconfigured definition.
    #[error("confirmer `{0}` is not configured")]
    NotConfigured(String),

    /// Inbound signal identifier does not match the `confirm<Name>` shape.
    #[error("signal `{0}` is not a confirmation signal")]
    InvalidSignal(String),

    /// Control used before it was fully wired (no factory, no template).
    #[error("{0}")]
    InvalidState(String),
}
