use egui::Context;

use crate::app::QuizApp;

/// Terminal screen when the question bank could not be loaded. No retry.
pub fn ui_load_error(app: &QuizApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading("⚠ Could not load the question bank");
            ui.add_space(10.0);
            ui.label(&app.message);
            ui.add_space(10.0);
            ui.label("Fix the data file and restart the application.");
        });
    });
}
