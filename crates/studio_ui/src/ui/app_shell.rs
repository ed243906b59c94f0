use std::time::Duration;

use eframe::egui;

use crate::app::StudioApp;
use crate::ui::constants::SIDE_PANEL_WIDTH;
use crate::ui::explorer::render_explorer;
use crate::ui::footer::render_footer;
use crate::ui::properties::render_properties;
use crate::ui::topbar::render_top_bar;
use crate::ui::viewport::render_viewport;

pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 850.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Real Robot Studio",
        options,
        Box::new(|_cc| Ok(Box::new(StudioApp::from_environment()))),
    )
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_runner();
        self.sync_viewport();
        if !self.runner.is_idle() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            render_top_bar(ui, self);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            render_footer(ui, self);
        });

        let panels = self.coordinator.panels();
        if panels.explorer_open {
            egui::SidePanel::left("explorer")
                .exact_width(SIDE_PANEL_WIDTH)
                .resizable(false)
                .show(ctx, |ui| {
                    render_explorer(ui, self);
                });
        }
        if panels.inspector_open {
            egui::SidePanel::right("properties")
                .exact_width(SIDE_PANEL_WIDTH)
                .resizable(false)
                .show(ctx, |ui| {
                    render_properties(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            render_viewport(ui, self);
        });
    }
}
