//! Live confirmation sessions.
//!
//! A `ConfirmerInstance` binds one configured definition to a concrete
//! parameter set. Everything it needs is captured by value at activation
//! time (handler, params, AJAX flag); heading and question are resolved
//! eagerly, so later changes to controller state never leak into an
//! already-shown prompt.

use std::fmt;

use crate::errors::{DialogError, Result};
use crate::registry::{ConfirmHandler, ConfirmerDefinition, Params};

/// A live confirmation session, ready to display.
pub struct ConfirmerInstance {
    name: String,
    handler: ConfirmHandler,
    params: Params,
    ajax_enabled: bool,
    resolved_heading: String,
    resolved_question: String,
}

impl ConfirmerInstance {
    /// Activate a definition with a concrete parameter set.
    ///
    /// Fails with [`DialogError::NotConfigured`] if the definition has not
    /// been configured. Literal heading/question sources are used as-is;
    /// computed sources are invoked once with the instance and its params.
    pub fn activate(
        definition: &ConfirmerDefinition,
        params: Params,
        ajax_enabled: bool,
    ) -> Result<Self> {
        let not_configured = || DialogError::NotConfigured(definition.name().to_string());

        if !definition.is_configured() {
            return Err(not_configured());
        }
        let handler = definition.handler().cloned().ok_or_else(not_configured)?;
        let heading = definition.heading().cloned().ok_or_else(not_configured)?;
        let question = definition.question().cloned().ok_or_else(not_configured)?;

        let mut instance = Self {
            name: definition.name().to_string(),
            handler,
            params,
            ajax_enabled,
            resolved_heading: String::new(),
            resolved_question: String::new(),
        };

        let resolved_heading = heading.resolve(&instance);
        let resolved_question = question.resolve(&instance);
        instance.resolved_heading = resolved_heading;
        instance.resolved_question = resolved_question;

        log::debug!("activated confirmer `{}`", instance.name);
        Ok(instance)
    }

    /// Invoke the bound handler with the parameters captured at activation.
    ///
    /// Synchronous from the controller's point of view; whatever the
    /// handler does afterwards (redirects, further UI changes) is the
    /// host's concern.
    pub fn confirm(&self) {
        log::debug!("confirmer `{}` confirmed", self.name);
        (self.handler)(&self.params);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn ajax_enabled(&self) -> bool {
        self.ajax_enabled
    }

    #[must_use]
    pub fn resolved_heading(&self) -> &str {
        &self.resolved_heading
    }

    #[must_use]
    pub fn resolved_question(&self) -> &str {
        &self.resolved_question
    }
}

impl fmt::Debug for ConfirmerInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmerInstance")
            .field("name", &self.name)
            .field("ajax_enabled", &self.ajax_enabled)
            .field("resolved_heading", &self.resolved_heading)
            .field("resolved_question", &self.resolved_question)
            .finish_non_exhaustive()
    }
}
