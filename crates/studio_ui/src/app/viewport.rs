use std::sync::Arc;

use studio_core::handles::LoadedModel;
use studio_core::viz::VisualizationFlags;

/// What the viewport last built its scene from. Change is detected by pointer
/// identity: the coordinator installs a fresh `Arc` for every update.
#[derive(Debug, Default)]
pub struct ViewportState {
    flags: Option<Arc<VisualizationFlags>>,
    model: Option<Arc<LoadedModel>>,
    scene_rebuilds: u64,
}

impl ViewportState {
    pub fn sync(
        &mut self,
        flags: &Arc<VisualizationFlags>,
        model: Option<&Arc<LoadedModel>>,
    ) -> bool {
        let flags_changed = !matches!(&self.flags, Some(current) if Arc::ptr_eq(current, flags));
        let model_changed = match (&self.model, model) {
            (Some(current), Some(next)) => !Arc::ptr_eq(current, next),
            (None, None) => false,
            _ => true,
        };
        if !flags_changed && !model_changed {
            return false;
        }

        self.flags = Some(Arc::clone(flags));
        self.model = model.cloned();
        self.scene_rebuilds += 1;
        log::debug!(
            "viewport rebuild #{} (groups {:?})",
            self.scene_rebuilds,
            flags.visible_groups()
        );
        true
    }

    pub fn scene_rebuilds(&self) -> u64 {
        self.scene_rebuilds
    }
}
