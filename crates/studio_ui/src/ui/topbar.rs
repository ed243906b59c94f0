use eframe::egui;

use crate::app::StudioApp;

pub fn render_top_bar(ui: &mut egui::Ui, app: &mut StudioApp) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Real Robot Studio");
            ui.label(
                egui::RichText::new("HARDWARE-IN-THE-LOOP INTERFACE")
                    .small()
                    .weak(),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let panels = app.coordinator.panels();
            let properties_label = if panels.inspector_open {
                "Hide Properties"
            } else {
                "Show Properties"
            };
            if ui
                .selectable_label(panels.inspector_open, properties_label)
                .clicked()
            {
                app.coordinator.toggle_inspector();
            }

            let explorer_label = if panels.explorer_open {
                "Hide Explorer"
            } else {
                "Show Explorer"
            };
            if ui
                .selectable_label(panels.explorer_open, explorer_label)
                .clicked()
            {
                app.coordinator.toggle_explorer();
            }
        });
    });
}
