//! Property-panel view model.

use crate::catalog;
use crate::coordinator::LoadSlot;
use crate::handles::ModelHandle;
use crate::viz::{GroupId, VisualizationFlags};

pub const EMPTY_PROMPT: &str = "Select a model to view properties";
pub const SLIDERS_PLACEHOLDER: &str = "Sliders coming soon...";
pub const NO_ACTUATORS_NOTICE: &str = "No actuators in this model";
pub const GROUP_USAGE_HINT: &str = "Most Menagerie models use Group 0 for primary visuals and \
Group 1-2 for decorative or collision geoms. Toggle groups to inspect the model.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCell {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupToggle {
    pub group: GroupId,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorSummary {
    None,
    Controlling { count: u32 },
}

impl ActuatorSummary {
    pub fn label(&self) -> String {
        match self {
            ActuatorSummary::None => NO_ACTUATORS_NOTICE.to_string(),
            ActuatorSummary::Controlling { count } => format!("Controlling {count} actuators"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesView {
    pub stats: [StatCell; 4],
    pub groups: Vec<GroupToggle>,
    pub actuators: ActuatorSummary,
    /// The statistics belong to the previous selection; a new load is pending.
    pub stale: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorView {
    Placeholder { message: String },
    Properties(PropertiesView),
}

impl InspectorView {
    pub fn build(slot: &LoadSlot, flags: &VisualizationFlags) -> Self {
        match slot.model() {
            Some(model) => {
                let mut view = properties(model, flags);
                view.stale = slot.is_stale();
                InspectorView::Properties(view)
            }
            None => InspectorView::Placeholder {
                message: placeholder_message(slot),
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, InspectorView::Placeholder { .. })
    }
}

/// Statistics and toggles for a present model. Counts are copied verbatim and
/// the six group toggles do not depend on the model.
pub fn properties(model: &ModelHandle, flags: &VisualizationFlags) -> PropertiesView {
    PropertiesView {
        stats: [
            StatCell {
                label: "Bodies",
                value: model.nbody,
            },
            StatCell {
                label: "Joints",
                value: model.njnt,
            },
            StatCell {
                label: "Geoms",
                value: model.ngeom,
            },
            StatCell {
                label: "DOFs",
                value: model.nv,
            },
        ],
        groups: flags
            .iter()
            .map(|(group, enabled)| GroupToggle { group, enabled })
            .collect(),
        actuators: if model.nu > 0 {
            ActuatorSummary::Controlling { count: model.nu }
        } else {
            ActuatorSummary::None
        },
        stale: false,
    }
}

fn placeholder_message(slot: &LoadSlot) -> String {
    match slot {
        LoadSlot::Loading { request, .. } => {
            format!("Loading {}…", catalog::display_name(&request.resource_path))
        }
        LoadSlot::Failed {
            resource_path,
            reason,
        } => format!("Failed to load {resource_path}: {reason}"),
        LoadSlot::Absent | LoadSlot::Loaded { .. } => EMPTY_PROMPT.to_string(),
    }
}

/// Flags value handed to the coordinator when `group` is clicked. `flags` is
/// left as it was.
pub fn toggle_group(flags: &VisualizationFlags, group: GroupId) -> VisualizationFlags {
    flags.toggled(group)
}
