use egui::{Align, Context, Layout, Visuals};

use crate::app::QuizApp;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("score_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Choice Quiz");
            ui.separator();
            ui.label(app.score_line().label());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("🔄 Reset quiz").clicked() {
                    app.reset_quiz();
                }
            });
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("theme_panel").show(ctx, |ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Dark").clicked() {
                app.dark_mode = true;
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light").clicked() {
                app.dark_mode = false;
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}
