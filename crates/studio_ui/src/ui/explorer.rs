//! Model explorer side panel.

use eframe::egui;

use studio_core::catalog::MENAGERIE_CATALOG;

use crate::app::StudioApp;

const FETCH_HINT: &str = "Select a robot to load its MuJoCo Menagerie scene. Large models may \
take a few seconds to fetch assets.";

pub fn render_explorer(ui: &mut egui::Ui, app: &mut StudioApp) {
    ui.heading("Model Explorer");
    ui.separator();

    let mut clear = false;
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(app.selector.query_mut())
                .hint_text("Search models...")
                .desired_width(ui.available_width() - 28.0),
        );
        let has_query = !app.selector.query().is_empty();
        clear = ui
            .add_enabled(has_query, egui::Button::new("✕").small())
            .on_hover_text("Clear search")
            .clicked();
    });
    if clear {
        app.clear_search();
    }
    ui.add_space(6.0);

    let current = app.coordinator.selected_path().to_string();
    let rows = app.selector.rows(MENAGERIE_CATALOG, Some(&current));
    let mut picked = None;

    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - 80.0).max(80.0))
        .show(ui, |ui| {
            for row in &rows {
                let text = format!(
                    "{}  {}\n{}",
                    row.entry.icon, row.entry.display_name, row.short_path
                );
                if ui.selectable_label(row.is_current, text).clicked() {
                    picked = Some(app.selector.pick(row.entry));
                }
            }
        });

    if let Some(action) = picked {
        app.handle_selector_action(action);
    }

    ui.separator();
    ui.label(egui::RichText::new(FETCH_HINT).small().weak());
}
