//! Confirmer definitions and the name → definition registry.
//!
//! A `ConfirmerDefinition` is the static configuration of one named
//! confirmation flow: handler callback plus heading and question sources.
//! Definitions are registered empty and configured exactly once; an
//! unconfigured definition is never activatable.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::errors::{DialogError, Result};
use crate::instance::ConfirmerInstance;
use crate::signal::is_valid_name;

/// Runtime parameter map supplied at activation time.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Callback invoked with the activation parameters when the user confirms.
pub type ConfirmHandler = Rc<dyn Fn(&Params)>;

/// Callback computing a heading or question from the live instance.
pub type TextFn = Rc<dyn Fn(&ConfirmerInstance, &Params) -> String>;

/// Source for a heading or question: literal text, or computed at
/// activation time from the instance and its parameters.
#[derive(Clone)]
pub enum TextSource {
    Literal(String),
    Computed(TextFn),
}

impl TextSource {
    /// Build a computed source from a closure.
    pub fn computed<F>(func: F) -> Self
    where
        F: Fn(&ConfirmerInstance, &Params) -> String + 'static,
    {
        Self::Computed(Rc::new(func))
    }

    /// Resolve against a live instance. Computed sources see the instance
    /// with its resolved texts still empty.
    pub(crate) fn resolve(&self, instance: &ConfirmerInstance) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Computed(func) => func(instance, instance.params()),
        }
    }
}

impl From<&str> for TextSource {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for TextSource {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl fmt::Debug for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Static configuration of one named confirmation flow.
pub struct ConfirmerDefinition {
    name: String,
    handler: Option<ConfirmHandler>,
    heading: Option<TextSource>,
    question: Option<TextSource>,
    configured: bool,
}

impl ConfirmerDefinition {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            handler: None,
            heading: None,
            question: None,
            configured: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether handler, heading, and question have all been assigned.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    #[must_use]
    pub fn handler(&self) -> Option<&ConfirmHandler> {
        self.handler.as_ref()
    }

    #[must_use]
    pub fn heading(&self) -> Option<&TextSource> {
        self.heading.as_ref()
    }

    #[must_use]
    pub fn question(&self) -> Option<&TextSource> {
        self.question.as_ref()
    }
}

impl fmt::Debug for ConfirmerDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmerDefinition")
            .field("name", &self.name)
            .field("configured", &self.configured)
            .finish_non_exhaustive()
    }
}

/// Result of a registry lookup. The `Unconfigured` and `NotFound` states
/// stay distinct here; [`ConfirmerRegistry::get`] collapses them into one
/// error at the API boundary.
#[derive(Debug)]
pub enum Lookup<'a> {
    Found(&'a ConfirmerDefinition),
    Unconfigured,
    NotFound,
}

/// Registry owning the name → definition mapping.
///
/// Enforces name validity, uniqueness, and configure-exactly-once.
#[derive(Debug, Default)]
pub struct ConfirmerRegistry {
    entries: HashMap<String, ConfirmerDefinition>,
}

impl ConfirmerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty, unconfigured definition under `name`.
    pub fn register(&mut self, name: &str) -> Result<&mut ConfirmerDefinition> {
        if !is_valid_name(name) {
            return Err(DialogError::InvalidName(name.to_string()));
        }
        if self.entries.contains_key(name) {
            return Err(DialogError::DuplicateName(name.to_string()));
        }

        log::debug!("registering confirmer `{name}`");
        Ok(self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| ConfirmerDefinition::new(name)))
    }

    /// Assign handler, question, and heading to a registered definition and
    /// mark it configured. A definition is configured at most once.
    pub fn configure(
        &mut self,
        name: &str,
        handler: ConfirmHandler,
        question: impl Into<TextSource>,
        heading: impl Into<TextSource>,
    ) -> Result<()> {
        let definition = self
            .entries
            .get_mut(name)
            .ok_or_else(|| DialogError::NotFound(name.to_string()))?;

        if definition.configured {
            return Err(DialogError::AlreadyConfigured(name.to_string()));
        }

        definition.handler = Some(handler);
        definition.question = Some(question.into());
        definition.heading = Some(heading.into());
        definition.configured = true;

        log::debug!("configured confirmer `{name}`");
        Ok(())
    }

    /// Look up `name`, keeping the unconfigured and absent states distinct.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Lookup<'_> {
        match self.entries.get(name) {
            Some(definition) if definition.configured => Lookup::Found(definition),
            Some(_) => Lookup::Unconfigured,
            None => Lookup::NotFound,
        }
    }

    /// Fetch a configured definition. Absent and unconfigured names both
    /// surface as [`DialogError::NotFound`].
    pub fn get(&self, name: &str) -> Result<&ConfirmerDefinition> {
        match self.lookup(name) {
            Lookup::Found(definition) => Ok(definition),
            Lookup::Unconfigured | Lookup::NotFound => {
                Err(DialogError::NotFound(name.to_string()))
            }
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    fn noop_handler() -> ConfirmHandler {
        Rc::new(|_| {})
    }

    #[test]
    fn register_then_configure_marks_configured() {
        let mut registry = ConfirmerRegistry::new();
        registry.register("deleteItem").unwrap();
        registry
            .configure("deleteItem", noop_handler(), "Really delete?", "Confirm")
            .unwrap();

        let definition = registry.get("deleteItem").unwrap();
        assert!(definition.is_configured());
        assert_eq!(definition.name(), "deleteItem");
    }

    #[test]
    fn register_rejects_invalid_names() {
        let mut registry = ConfirmerRegistry::new();
        for name in ["", "delete item", "item42", "naïve"] {
            let err = registry.register(name).unwrap_err();
            assert_eq!(err, DialogError::InvalidName(name.to_string()));
        }
    }

    #[test]
    fn register_rejects_duplicate_names() {
        let mut registry = ConfirmerRegistry::new();
        registry.register("logout").unwrap();
        let err = registry.register("logout").unwrap_err();
        assert_eq!(err, DialogError::DuplicateName("logout".into()));
    }

    #[test]
    fn configure_unknown_name_is_not_found() {
        let mut registry = ConfirmerRegistry::new();
        let err = registry
            .configure("missing", noop_handler(), "q", "h")
            .unwrap_err();
        assert_eq!(err, DialogError::NotFound("missing".into()));
    }

    #[test]
    fn configure_twice_fails_and_keeps_first_configuration() {
        let mut registry = ConfirmerRegistry::new();
        registry.register("logout").unwrap();
        registry
            .configure("logout", noop_handler(), "Log out now?", "Confirm")
            .unwrap();

        let err = registry
            .configure("logout", noop_handler(), "Other?", "Other")
            .unwrap_err();
        assert_eq!(err, DialogError::AlreadyConfigured("logout".into()));

        let definition = registry.get("logout").unwrap();
        match definition.question() {
            Some(TextSource::Literal(text)) => assert_eq!(text, "Log out now?"),
            other => panic!("unexpected question source: {other:?}"),
        }
        match definition.heading() {
            Some(TextSource::Literal(text)) => assert_eq!(text, "Confirm"),
            other => panic!("unexpected heading source: {other:?}"),
        }
    }

    #[test]
    fn lookup_keeps_states_distinct() {
        let mut registry = ConfirmerRegistry::new();
        assert!(matches!(registry.lookup("logout"), Lookup::NotFound));

        registry.register("logout").unwrap();
        assert!(matches!(registry.lookup("logout"), Lookup::Unconfigured));

        registry
            .configure("logout", noop_handler(), "q", "h")
            .unwrap();
        assert!(matches!(registry.lookup("logout"), Lookup::Found(_)));
    }

    #[test]
    fn get_collapses_absent_and_unconfigured() {
        let mut registry = ConfirmerRegistry::new();
        registry.register("logout").unwrap();

        let unconfigured = registry.get("logout").unwrap_err();
        let absent = registry.get("missing").unwrap_err();
        assert_eq!(unconfigured, DialogError::NotFound("logout".into()));
        assert_eq!(absent, DialogError::NotFound("missing".into()));
    }
}
