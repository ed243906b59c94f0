use eframe::egui;

use crate::app::{StudioApp, StudioStatus};
use crate::ui::constants::{RESOURCES_LABEL, STATUS_FAILED, STATUS_LOADING, STATUS_READY};

pub fn render_footer(ui: &mut egui::Ui, app: &StudioApp) {
    let status = app.status();
    let color = match status {
        StudioStatus::Ready => STATUS_READY,
        StudioStatus::Loading => STATUS_LOADING,
        StudioStatus::Failed => STATUS_FAILED,
    };

    ui.horizontal(|ui| {
        ui.colored_label(color, "●");
        ui.label(
            egui::RichText::new(format!("Engine: {}", app.runner.source_name()))
                .small()
                .strong(),
        );
        ui.add_space(16.0);
        ui.label(egui::RichText::new(RESOURCES_LABEL).small());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(status.label()).small().strong());
        });
    });

    for warning in &app.startup_warnings {
        ui.colored_label(STATUS_LOADING, egui::RichText::new(warning).small());
    }
}
