//! Application state for the studio window.

mod sources;
mod viewport;

use std::sync::Arc;

use studio_core::config::{config_file_path, load_config, StudioConfig};
use studio_core::coordinator::{CompletionOutcome, LoadSlot, StudioCoordinator};
use studio_core::runner::{ModelRunner, ModelSource};
use studio_core::selector::{ModelSelector, SelectorAction};
use studio_core::viz::GroupId;

pub use viewport::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudioStatus {
    Ready,
    Loading,
    Failed,
}

impl StudioStatus {
    pub fn label(self) -> &'static str {
        match self {
            StudioStatus::Ready => "Ready to Simulate",
            StudioStatus::Loading => "Loading…",
            StudioStatus::Failed => "Load failed",
        }
    }
}

/// Main application state: the coordinator plus the pieces of UI-local state
/// that never leave this window.
pub struct StudioApp {
    pub coordinator: StudioCoordinator,
    pub selector: ModelSelector,
    pub runner: ModelRunner,
    pub viewport: ViewportState,
    pub startup_warnings: Vec<String>,
}

impl StudioApp {
    /// Builds the app from `studio_config.json` in the working directory,
    /// falling back to defaults when the file is unusable.
    pub fn from_environment() -> Self {
        let mut warnings = Vec::new();
        let config = match config_file_path().and_then(|path| load_config(&path)) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("config ignored: {error}");
                warnings.push(format!("Config ignored: {error}"));
                StudioConfig::default()
            }
        };
        let (source, source_warning) = sources::select_source(&config);
        warnings.extend(source_warning);
        Self::new(config, source, warnings)
    }

    pub fn new(
        config: StudioConfig,
        source: Arc<dyn ModelSource>,
        startup_warnings: Vec<String>,
    ) -> Self {
        let mut coordinator = StudioCoordinator::new(&config);
        let mut runner = ModelRunner::new(source);
        if let Some(request) = coordinator.start() {
            runner.request(request);
        }
        Self {
            coordinator,
            selector: ModelSelector::new(),
            runner,
            viewport: ViewportState::default(),
            startup_warnings,
        }
    }

    pub fn handle_selector_action(&mut self, action: SelectorAction) {
        match action {
            SelectorAction::Select(path) => self.select_model(&path),
        }
    }

    pub fn clear_search(&mut self) {
        self.selector.clear_query();
    }

    pub fn select_model(&mut self, resource_path: &str) {
        if let Some(request) = self.coordinator.select_model(resource_path) {
            self.runner.request(request);
        }
    }

    pub fn toggle_group(&mut self, group: GroupId) {
        self.coordinator.toggle_group(group);
    }

    /// Applies every completion that has arrived. Returns true if the load
    /// slot changed.
    pub fn poll_runner(&mut self) -> bool {
        let mut changed = false;
        for completion in self.runner.drain_completions() {
            match self.coordinator.apply_completion(completion) {
                CompletionOutcome::Applied | CompletionOutcome::Failed => changed = true,
                CompletionOutcome::Superseded => {}
            }
        }
        changed
    }

    /// Hands the current flags and model to the viewport; true when it had to
    /// rebuild its scene.
    pub fn sync_viewport(&mut self) -> bool {
        self.viewport.sync(
            self.coordinator.viz_flags(),
            self.coordinator.slot().loaded(),
        )
    }

    pub fn status(&self) -> StudioStatus {
        match self.coordinator.slot() {
            LoadSlot::Loading { .. } => StudioStatus::Loading,
            LoadSlot::Failed { .. } => StudioStatus::Failed,
            LoadSlot::Absent | LoadSlot::Loaded { .. } => StudioStatus::Ready,
        }
    }
}
