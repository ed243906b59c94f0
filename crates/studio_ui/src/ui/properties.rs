//! Properties side panel, rendered from the inspector view model.

use eframe::egui;

use studio_core::inspector::{
    ActuatorSummary, InspectorView, PropertiesView, GROUP_USAGE_HINT, SLIDERS_PLACEHOLDER,
};
use studio_core::viz::GroupId;

use crate::app::StudioApp;

pub fn render_properties(ui: &mut egui::Ui, app: &mut StudioApp) {
    let view = InspectorView::build(app.coordinator.slot(), app.coordinator.viz_flags());
    match view {
        InspectorView::Placeholder { message } => {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(message).italics().weak());
            });
        }
        InspectorView::Properties(view) => {
            if let Some(group) = render_model_properties(ui, &view) {
                app.toggle_group(group);
            }
        }
    }
}

/// Returns the group whose toggle was clicked this frame.
fn render_model_properties(ui: &mut egui::Ui, view: &PropertiesView) -> Option<GroupId> {
    let mut clicked = None;

    ui.heading("Properties");
    if view.stale {
        ui.label(egui::RichText::new("Showing previous model while loading…").small().weak());
    }
    ui.separator();

    section_label(ui, "MODEL STATISTICS");
    egui::Grid::new("model_statistics")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for (index, cell) in view.stats.iter().enumerate() {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(cell.label).small().weak());
                    ui.label(egui::RichText::new(cell.value.to_string()).monospace().strong());
                });
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    ui.add_space(8.0);

    section_label(ui, "VISUALIZATION GROUPS");
    egui::Grid::new("visualization_groups")
        .num_columns(3)
        .show(ui, |ui| {
            for (index, toggle) in view.groups.iter().enumerate() {
                if ui
                    .selectable_label(toggle.enabled, toggle.group.to_string())
                    .clicked()
                {
                    clicked = Some(toggle.group);
                }
                if index % 3 == 2 {
                    ui.end_row();
                }
            }
        });
    ui.add_space(8.0);

    section_label(ui, "ACTIVE ACTUATORS");
    ui.label(egui::RichText::new(view.actuators.label()).small().italics());
    if let ActuatorSummary::Controlling { .. } = view.actuators {
        ui.group(|ui| {
            ui.label(egui::RichText::new(SLIDERS_PLACEHOLDER).small().italics().weak());
        });
    }

    ui.separator();
    ui.label(egui::RichText::new(GROUP_USAGE_HINT).small().italics().weak());

    clicked
}

fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).small().strong().weak());
}
