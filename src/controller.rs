//! The outward-facing dialog control.
//!
//! `DialogController` owns the confirmer registry and at most one active
//! [`ConfirmerInstance`]. Inbound dynamic signals are decoded and routed to
//! the matching registered flow; on confirmation the bound handler runs
//! with the parameters captured at activation. Rendering produces a plain
//! snapshot for the host view layer, which owns markup and transport.

use std::path::{Path, PathBuf};

use crate::config::DialogConfig;
use crate::errors::{DialogError, Result};
use crate::instance::ConfirmerInstance;
use crate::registry::{ConfirmHandler, ConfirmerDefinition, ConfirmerRegistry, Params, TextSource};
use crate::signal::decode_signal;

/// Default confirmer template path, used when none is bound.
pub const DEFAULT_TEMPLATE_FILE: &str = "templates/default.html";

/// Default dialog layout path, used when none is bound.
pub const DEFAULT_LAYOUT_FILE: &str = "templates/layout.html";

/// Factory producing a live instance from a definition, the activation
/// parameters, and the controller's AJAX mode at that moment. Injected at
/// setup time and called eagerly on every activation.
pub type ConfirmerFactory =
    Box<dyn Fn(&ConfirmerDefinition, Params, bool) -> Result<ConfirmerInstance>>;

/// View-facing state of the active confirmer.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmerSnapshot {
    pub name: String,
    pub heading: String,
    pub question: String,
    pub params: Params,
    pub ajax: bool,
}

impl ConfirmerSnapshot {
    fn of(instance: &ConfirmerInstance) -> Self {
        Self {
            name: instance.name().to_string(),
            heading: instance.resolved_heading().to_string(),
            question: instance.resolved_question().to_string(),
            params: instance.params().clone(),
            ajax: instance.ajax_enabled(),
        }
    }
}

/// One render pass. `confirmer` is `None` for the idle/empty dialog slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogRender {
    pub layout_file: PathBuf,
    pub template_file: PathBuf,
    pub confirmer: Option<ConfirmerSnapshot>,
}

/// The confirmation dialog control.
///
/// One controller is constructed per request in the host environment and
/// torn down with it; all operations are synchronous. At most one
/// confirmation is pending at a time.
pub struct DialogController {
    registry: ConfirmerRegistry,
    active: Option<ConfirmerInstance>,
    ajax_mode: bool,
    layout_file: Option<PathBuf>,
    template_file: Option<PathBuf>,
    factory: Option<ConfirmerFactory>,
    needs_redraw: bool,
}

impl Default for DialogController {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogController {
    /// A controller with no instance factory wired yet; the host injects
    /// one via [`set_factory`](Self::set_factory) before any activation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: ConfirmerRegistry::new(),
            active: None,
            ajax_mode: true,
            layout_file: None,
            template_file: None,
            factory: None,
            needs_redraw: false,
        }
    }

    /// A controller wired with the default factory
    /// ([`ConfirmerInstance::activate`]).
    #[must_use]
    pub fn with_default_factory() -> Self {
        let mut controller = Self::new();
        controller.set_factory(Box::new(ConfirmerInstance::activate));
        controller
    }

    /// A controller wired with the default factory and the settings from
    /// `config` applied.
    #[must_use]
    pub fn from_config(config: &DialogConfig) -> Self {
        let mut controller = Self::with_default_factory();
        controller.ajax_mode = config.ajax;
        controller.layout_file.clone_from(&config.layout_file);
        controller.template_file.clone_from(&config.template_file);
        controller
    }

    /// Inject the instance factory.
    pub fn set_factory(&mut self, factory: ConfirmerFactory) {
        self.factory = Some(factory);
    }

    /// Register and configure a confirmation flow in one step.
    ///
    /// Registers `name` when absent, then configures it. Surfaces
    /// [`DialogError::InvalidName`] for invalid names and
    /// [`DialogError::AlreadyConfigured`] for repeated definitions.
    pub fn add_confirmer(
        &mut self,
        name: &str,
        handler: ConfirmHandler,
        question: impl Into<TextSource>,
        heading: impl Into<TextSource>,
    ) -> Result<()> {
        if !self.registry.contains(name) {
            self.registry.register(name)?;
        }
        self.registry.configure(name, handler, question, heading)
    }

    /// Activate the named confirmer with a concrete parameter set,
    /// replacing any previously active instance.
    ///
    /// Absent and unconfigured names both fail with
    /// [`DialogError::NotFound`]; activation without a wired factory fails
    /// with [`DialogError::InvalidState`] and leaves the active instance
    /// untouched.
    pub fn activate(&mut self, name: &str, params: Params) -> Result<()> {
        let definition = self.registry.get(name)?;
        let factory = self.factory.as_ref().ok_or_else(|| {
            DialogError::InvalidState("confirmer factory is not wired".to_string())
        })?;

        let instance = factory(definition, params, self.ajax_mode)?;

        log::debug!("showing confirmer `{name}`");
        self.active = Some(instance);
        self.needs_redraw = true;
        Ok(())
    }

    /// Route a dynamically named signal (`confirm<Name>`) to the matching
    /// confirmer. Decoding failures surface as
    /// [`DialogError::InvalidSignal`]; the rest behaves exactly like
    /// [`activate`](Self::activate).
    pub fn dispatch_signal(&mut self, signal: &str, params: Params) -> Result<()> {
        let name = decode_signal(signal)?;
        self.activate(&name, params)
    }

    /// Clear the active confirmer and mark the prompt state for redraw.
    pub fn reset(&mut self) {
        if self.active.take().is_some() {
            log::debug!("resetting active confirmer");
        }
        self.needs_redraw = true;
    }

    /// Render the current state for the view layer.
    ///
    /// Fails with [`DialogError::InvalidState`] when there is neither an
    /// active instance nor a bound template; otherwise yields the resolved
    /// template/layout paths and the active confirmer snapshot, if any.
    pub fn render(&self) -> Result<DialogRender> {
        if self.active.is_none() && self.template_file.is_none() {
            return Err(DialogError::InvalidState(
                "dialog control is without template".to_string(),
            ));
        }

        Ok(DialogRender {
            layout_file: self.layout_file(),
            template_file: self.template_file(),
            confirmer: self.active.as_ref().map(ConfirmerSnapshot::of),
        })
    }

    /// Drain the redraw flag; the view layer calls this once per pass.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Use partial (AJAX) rendering for instances activated afterwards.
    pub fn enable_ajax(&mut self) {
        self.ajax_mode = true;
    }

    /// Use full-page rendering for instances activated afterwards.
    pub fn disable_ajax(&mut self) {
        self.ajax_mode = false;
    }

    #[must_use]
    pub fn is_ajax_enabled(&self) -> bool {
        self.ajax_mode
    }

    /// Override the dialog layout path.
    pub fn set_layout_file(&mut self, path: impl Into<PathBuf>) {
        self.layout_file = Some(path.into());
    }

    /// Override the confirmer template path.
    pub fn set_template_file(&mut self, path: impl Into<PathBuf>) {
        self.template_file = Some(path.into());
    }

    /// The bound confirmer template path, or the crate default.
    #[must_use]
    pub fn template_file(&self) -> PathBuf {
        self.template_file
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_TEMPLATE_FILE).to_path_buf())
    }

    /// The bound layout path, or the crate default.
    #[must_use]
    pub fn layout_file(&self) -> PathBuf {
        self.layout_file
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_LAYOUT_FILE).to_path_buf())
    }

    #[must_use]
    pub fn active(&self) -> Option<&ConfirmerInstance> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn registry(&self) -> &ConfirmerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ConfirmerRegistry {
        &mut self.registry
    }
}
