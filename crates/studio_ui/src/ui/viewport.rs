use eframe::egui;

use studio_core::catalog;
use studio_core::coordinator::LoadSlot;

use crate::app::StudioApp;
use crate::ui::constants::{STATUS_FAILED, STATUS_LOADING};

pub fn render_viewport(ui: &mut egui::Ui, app: &StudioApp) {
    let selected = app.coordinator.selected_path();
    let icon = catalog::find(selected).map(|entry| entry.icon).unwrap_or("📦");

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(format!("{icon}  {}", catalog::display_name(selected)));
        ui.label(egui::RichText::new(selected).monospace().weak());
        ui.add_space(12.0);

        match app.coordinator.slot() {
            LoadSlot::Absent => {
                ui.label("No model loaded");
            }
            LoadSlot::Loading { request, .. } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.colored_label(
                        STATUS_LOADING,
                        format!(
                            "Fetching {} ({})",
                            catalog::short_path(&request.resource_path),
                            request.seq
                        ),
                    );
                });
            }
            LoadSlot::Failed { reason, .. } => {
                ui.colored_label(STATUS_FAILED, reason);
            }
            LoadSlot::Loaded { .. } => {}
        }

        if let (Some(model), Some(state)) = (app.coordinator.model(), app.coordinator.state()) {
            let groups: Vec<String> = app
                .coordinator
                .viz_flags()
                .visible_groups()
                .iter()
                .map(|group| group.get().to_string())
                .collect();
            let groups = if groups.is_empty() {
                "none".to_string()
            } else {
                groups.join(", ")
            };
            ui.label(format!("Visible geom groups: {groups}"));
            ui.label(format!(
                "Sim time: {:.3} s   DOFs: {}   Controls: {}",
                state.time,
                model.nv,
                state.ctrl.len()
            ));
            ui.label(
                egui::RichText::new(format!(
                    "Scene rebuilds: {}",
                    app.viewport.scene_rebuilds()
                ))
                .small()
                .weak(),
            );
        }
    });
}
