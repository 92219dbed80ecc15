//! Signal name codec for dynamically named confirmation signals.
//!
//! Every inbound signal of the form `confirm<Name>` routes to one shared
//! dispatcher; this module recovers which named confirmer was intended
//! (`confirmDeleteItem` → `deleteItem`) and generates outbound identifiers
//! for links (`deleteItem` → `confirmDeleteItem`). The mapping is an
//! explicit decode/encode pair rather than naming-convention reflection.

use crate::errors::{DialogError, Result};

/// Fixed prefix shared by all confirmation signals.
pub const SIGNAL_PREFIX: &str = "confirm";

/// Whether `name` is a valid confirmer name: nonempty, every character in
/// `[A-Za-z_]`.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphabetic() || ch == '_')
}

/// Decode an inbound signal identifier into the registered confirmer name.
///
/// Strips the `confirm` prefix and lower-cases the first character of the
/// remainder. Fails with [`DialogError::InvalidSignal`] when the prefix is
/// missing, the suffix is empty, or the suffix is not a valid name.
pub fn decode_signal(signal: &str) -> Result<String> {
    let suffix = signal
        .strip_prefix(SIGNAL_PREFIX)
        .ok_or_else(|| DialogError::InvalidSignal(signal.to_string()))?;

    if !is_valid_name(suffix) {
        return Err(DialogError::InvalidSignal(signal.to_string()));
    }

    let mut chars = suffix.chars();
    let Some(first) = chars.next() else {
        return Err(DialogError::InvalidSignal(signal.to_string()));
    };

    Ok(format!("{}{}", first.to_ascii_lowercase(), chars.as_str()))
}

/// Encode a confirmer name into its outbound signal identifier.
///
/// Upper-cases the first character and prepends the `confirm` prefix.
/// Fails with [`DialogError::InvalidName`] for names that would not be
/// accepted at registration.
pub fn encode_signal(name: &str) -> Result<String> {
    if !is_valid_name(name) {
        return Err(DialogError::InvalidName(name.to_string()));
    }

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(DialogError::InvalidName(name.to_string()));
    };

    Ok(format!(
        "{SIGNAL_PREFIX}{}{}",
        first.to_ascii_uppercase(),
        chars.as_str()
    ))
}
