//! Top-level studio state owner.
//!
//! All shared view state lives here: the selected resource path, the loaded
//! model/state pair, the visualization flags and the panel visibility. The
//! selector, the inspector and the runner only read it or report actions back.

use std::sync::Arc;

use crate::config::StudioConfig;
use crate::handles::{LoadedModel, ModelHandle, StateHandle};
use crate::runner::{LoadCompletion, LoadRequest, LoadSequence};
use crate::viz::{GroupId, VisualizationFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    pub explorer_open: bool,
    pub inspector_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReselectPolicy {
    /// Re-selecting a loaded or loading path does nothing.
    Ignore,
    /// Re-selecting always issues a fresh load.
    Reload,
}

/// A loaded pair together with the path it was loaded from.
#[derive(Debug, Clone)]
pub struct ShownModel {
    pub resource_path: String,
    pub model: Arc<LoadedModel>,
}

#[derive(Debug, Clone)]
pub enum LoadSlot {
    Absent,
    /// A request is in flight. `previous` keeps the last loaded pair on screen
    /// until the new one arrives.
    Loading {
        request: LoadRequest,
        previous: Option<ShownModel>,
    },
    Loaded {
        resource_path: String,
        model: Arc<LoadedModel>,
    },
    Failed {
        resource_path: String,
        reason: String,
    },
}

impl LoadSlot {
    pub fn loaded(&self) -> Option<&Arc<LoadedModel>> {
        match self {
            LoadSlot::Loaded { model, .. } => Some(model),
            LoadSlot::Loading { previous, .. } => previous.as_ref().map(|shown| &shown.model),
            LoadSlot::Absent | LoadSlot::Failed { .. } => None,
        }
    }

    pub fn model(&self) -> Option<&ModelHandle> {
        self.loaded().map(|loaded| loaded.model())
    }

    pub fn state(&self) -> Option<&StateHandle> {
        self.loaded().map(|loaded| loaded.state())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadSlot::Loading { .. })
    }

    /// True while the displayed pair was loaded from a different path than
    /// the one being fetched.
    pub fn is_stale(&self) -> bool {
        match self {
            LoadSlot::Loading {
                request,
                previous: Some(shown),
            } => shown.resource_path != request.resource_path,
            _ => false,
        }
    }

    fn shown(&self) -> Option<ShownModel> {
        match self {
            LoadSlot::Loaded {
                resource_path,
                model,
            } => Some(ShownModel {
                resource_path: resource_path.clone(),
                model: Arc::clone(model),
            }),
            LoadSlot::Loading { previous, .. } => previous.clone(),
            LoadSlot::Absent | LoadSlot::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    Applied,
    Failed,
    /// A newer request was issued after this one; the result was dropped.
    Superseded,
}

pub struct StudioCoordinator {
    selected_path: String,
    slot: LoadSlot,
    viz_flags: Arc<VisualizationFlags>,
    panels: PanelVisibility,
    next_seq: LoadSequence,
    latest_seq: Option<LoadSequence>,
    reselect: ReselectPolicy,
}

impl StudioCoordinator {
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            selected_path: config.default_model.clone(),
            slot: LoadSlot::Absent,
            viz_flags: Arc::new(config.initial_flags()),
            panels: PanelVisibility {
                explorer_open: config.explorer_open,
                inspector_open: config.inspector_open,
            },
            next_seq: LoadSequence::first(),
            latest_seq: None,
            reselect: if config.reload_on_reselect {
                ReselectPolicy::Reload
            } else {
                ReselectPolicy::Ignore
            },
        }
    }

    /// Issues the first load for the default selection. Returns `None` once
    /// anything has been requested.
    pub fn start(&mut self) -> Option<LoadRequest> {
        if self.latest_seq.is_some() {
            return None;
        }
        let path = self.selected_path.clone();
        Some(self.issue_request(path))
    }

    pub fn select_model(&mut self, resource_path: &str) -> Option<LoadRequest> {
        if resource_path == self.selected_path
            && self.reselect == ReselectPolicy::Ignore
            && matches!(self.slot, LoadSlot::Loaded { .. } | LoadSlot::Loading { .. })
        {
            log::debug!("'{resource_path}' is already selected, ignoring");
            return None;
        }
        log::info!("selected '{resource_path}'");
        self.selected_path = resource_path.to_string();
        Some(self.issue_request(resource_path.to_string()))
    }

    fn issue_request(&mut self, resource_path: String) -> LoadRequest {
        let seq = self.next_seq;
        self.next_seq = seq.next();
        self.latest_seq = Some(seq);

        let previous = self.slot.shown();
        let request = LoadRequest { seq, resource_path };
        self.slot = LoadSlot::Loading {
            request: request.clone(),
            previous,
        };
        request
    }

    pub fn apply_completion(&mut self, completion: LoadCompletion) -> CompletionOutcome {
        if self.latest_seq != Some(completion.seq) {
            log::debug!(
                "dropping superseded load {} for '{}'",
                completion.seq,
                completion.resource_path
            );
            return CompletionOutcome::Superseded;
        }

        match completion.result {
            Ok(loaded) => {
                let model = loaded.model();
                log::info!(
                    "loaded '{}' ({} bodies, {} joints, {} actuators)",
                    completion.resource_path,
                    model.nbody,
                    model.njnt,
                    model.nu
                );
                self.slot = LoadSlot::Loaded {
                    resource_path: completion.resource_path,
                    model: Arc::new(loaded),
                };
                CompletionOutcome::Applied
            }
            Err(error) => {
                log::warn!("failed to load '{}': {error}", completion.resource_path);
                self.slot = LoadSlot::Failed {
                    resource_path: completion.resource_path,
                    reason: error.to_string(),
                };
                CompletionOutcome::Failed
            }
        }
    }

    pub fn set_viz_flags(&mut self, flags: VisualizationFlags) {
        log::debug!("visualization groups now {:?}", flags.groups());
        self.viz_flags = Arc::new(flags);
    }

    pub fn toggle_group(&mut self, group: GroupId) {
        let flags = self.viz_flags.toggled(group);
        self.set_viz_flags(flags);
    }

    pub fn toggle_explorer(&mut self) {
        self.panels.explorer_open = !self.panels.explorer_open;
    }

    pub fn toggle_inspector(&mut self) {
        self.panels.inspector_open = !self.panels.inspector_open;
    }

    pub fn selected_path(&self) -> &str {
        &self.selected_path
    }

    pub fn slot(&self) -> &LoadSlot {
        &self.slot
    }

    pub fn model(&self) -> Option<&ModelHandle> {
        self.slot.model()
    }

    pub fn state(&self) -> Option<&StateHandle> {
        self.slot.state()
    }

    pub fn viz_flags(&self) -> &Arc<VisualizationFlags> {
        &self.viz_flags
    }

    pub fn panels(&self) -> PanelVisibility {
        self.panels
    }

    pub fn reselect_policy(&self) -> ReselectPolicy {
        self.reselect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_RESOURCE_PATH;
    use crate::runner::LoadError;

    const H1: &str = "/mujoco/menagerie/unitree_h1/scene.xml";

    fn model(nu: u32) -> LoadedModel {
        LoadedModel::at_rest(ModelHandle {
            nbody: 5,
            njnt: 4,
            ngeom: 10,
            nv: 4,
            nu,
        })
        .expect("valid model")
    }

    fn ok(request: &LoadRequest, nu: u32) -> LoadCompletion {
        LoadCompletion {
            seq: request.seq,
            resource_path: request.resource_path.clone(),
            result: Ok(model(nu)),
        }
    }

    #[test]
    fn initial_state_follows_config_defaults() {
        let coordinator = StudioCoordinator::new(&StudioConfig::default());
        assert_eq!(coordinator.selected_path(), DEFAULT_RESOURCE_PATH);
        assert!(matches!(coordinator.slot(), LoadSlot::Absent));
        assert!(coordinator.model().is_none());
        assert!(coordinator.state().is_none());
        assert_eq!(
            coordinator.panels(),
            PanelVisibility {
                explorer_open: false,
                inspector_open: true
            }
        );
        assert_eq!(
            coordinator.viz_flags().groups(),
            [true, true, true, false, false, false]
        );
    }

    #[test]
    fn start_only_issues_once() {
        let mut coordinator = StudioCoordinator::new(&StudioConfig::default());
        let first = coordinator.start().expect("first start issues a request");
        assert_eq!(first.resource_path, DEFAULT_RESOURCE_PATH);
        assert!(coordinator.start().is_none());
    }

    #[test]
    fn selection_keeps_previous_pair_until_completion() {
        let mut coordinator = StudioCoordinator::new(&StudioConfig::default());
        let first = coordinator.start().expect("initial request");
        coordinator.apply_completion(ok(&first, 3));

        coordinator.select_model(H1).expect("new selection issues a request");
        assert_eq!(coordinator.selected_path(), H1);
        assert!(coordinator.slot().is_stale());
        assert_eq!(coordinator.model().map(|m| m.nu), Some(3));
    }

    #[test]
    fn returning_to_the_shown_path_is_not_stale() {
        let mut coordinator = StudioCoordinator::new(&StudioConfig::default());
        let first = coordinator.start().expect("initial request");
        coordinator.apply_completion(ok(&first, 3));

        coordinator.select_model(H1).expect("switch away");
        assert!(coordinator.slot().is_stale());

        let back = coordinator
            .select_model(DEFAULT_RESOURCE_PATH)
            .expect("switch back");
        assert_eq!(back.resource_path, DEFAULT_RESOURCE_PATH);
        assert!(!coordinator.slot().is_stale());
        assert_eq!(coordinator.model().map(|m| m.nu), Some(3));

        coordinator.select_model(H1).expect("switch away again");
        assert!(coordinator.slot().is_stale());
    }

    #[test]
    fn reload_of_the_shown_path_is_not_stale() {
        let config = StudioConfig {
            reload_on_reselect: true,
            ..StudioConfig::default()
        };
        let mut coordinator = StudioCoordinator::new(&config);
        let first = coordinator.start().expect("initial request");
        coordinator.apply_completion(ok(&first, 1));

        coordinator
            .select_model(DEFAULT_RESOURCE_PATH)
            .expect("reload issues");
        assert!(coordinator.slot().is_loading());
        assert!(!coordinator.slot().is_stale());
    }

    #[test]
    fn failure_clears_both_handles() {
        let mut coordinator = StudioCoordinator::new(&StudioConfig::default());
        let first = coordinator.start().expect("initial request");
        coordinator.apply_completion(ok(&first, 1));
        let second = coordinator.select_model(H1).expect("request");

        let outcome = coordinator.apply_completion(LoadCompletion {
            seq: second.seq,
            resource_path: second.resource_path.clone(),
            result: Err(LoadError::Source("asset fetch timed out".to_string())),
        });

        assert_eq!(outcome, CompletionOutcome::Failed);
        assert!(coordinator.model().is_none());
        assert!(coordinator.state().is_none());
        match coordinator.slot() {
            LoadSlot::Failed {
                resource_path,
                reason,
            } => {
                assert_eq!(resource_path, H1);
                assert!(reason.contains("asset fetch timed out"));
            }
            other => panic!("expected failed slot, got {other:?}"),
        }
    }

    #[test]
    fn reselecting_loaded_path_is_ignored_by_default() {
        let mut coordinator = StudioCoordinator::new(&StudioConfig::default());
        let first = coordinator.start().expect("initial request");
        assert!(coordinator.select_model(DEFAULT_RESOURCE_PATH).is_none());
        coordinator.apply_completion(ok(&first, 0));
        assert!(coordinator.select_model(DEFAULT_RESOURCE_PATH).is_none());
    }

    #[test]
    fn reselecting_after_failure_retries() {
        let mut coordinator = StudioCoordinator::new(&StudioConfig::default());
        let first = coordinator.start().expect("initial request");
        coordinator.apply_completion(LoadCompletion {
            seq: first.seq,
            resource_path: first.resource_path.clone(),
            result: Err(LoadError::NotFound {
                resource_path: first.resource_path.clone(),
            }),
        });
        let retry = coordinator
            .select_model(DEFAULT_RESOURCE_PATH)
            .expect("failed path can be retried");
        assert!(retry.seq > first.seq);
    }

    #[test]
    fn reload_policy_always_issues() {
        let config = StudioConfig {
            reload_on_reselect: true,
            ..StudioConfig::default()
        };
        let mut coordinator = StudioCoordinator::new(&config);
        let first = coordinator.start().expect("initial request");
        coordinator.apply_completion(ok(&first, 0));
        let reload = coordinator
            .select_model(DEFAULT_RESOURCE_PATH)
            .expect("reload policy issues again");
        assert!(reload.seq > first.seq);
        assert_eq!(coordinator.reselect_policy(), ReselectPolicy::Reload);
    }

    #[test]
    fn toggle_group_installs_a_new_snapshot() {
        let mut coordinator = StudioCoordinator::new(&StudioConfig::default());
        let before = Arc::clone(coordinator.viz_flags());
        coordinator.toggle_group(GroupId::new(3).expect("group 3"));
        let after = Arc::clone(coordinator.viz_flags());

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.groups(), [true, true, true, true, false, false]);
        assert_eq!(before.groups(), [true, true, true, false, false, false]);
    }

    #[test]
    fn panel_toggles_leave_shared_state_alone() {
        let mut coordinator = StudioCoordinator::new(&StudioConfig::default());
        let first = coordinator.start().expect("initial request");
        coordinator.apply_completion(ok(&first, 2));
        let flags = Arc::clone(coordinator.viz_flags());
        let loaded = coordinator.slot().loaded().cloned().expect("loaded");

        coordinator.toggle_explorer();
        coordinator.toggle_inspector();

        assert_eq!(
            coordinator.panels(),
            PanelVisibility {
                explorer_open: true,
                inspector_open: false
            }
        );
        assert_eq!(coordinator.selected_path(), DEFAULT_RESOURCE_PATH);
        assert!(Arc::ptr_eq(&flags, coordinator.viz_flags()));
        let still_loaded = coordinator.slot().loaded().expect("still loaded");
        assert!(Arc::ptr_eq(&loaded, still_loaded));
    }
}
