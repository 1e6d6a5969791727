use egui::Ui;

use crate::app::QuizApp;
use crate::model::{PresentationMode, QuestionSet};

/// The settings card. Widgets edit the pending snapshot only; nothing takes
/// effect until Apply or Start fires.
pub fn ui_setup(app: &mut QuizApp, ui: &mut Ui) {
    let (all, smart) = app.catalog_counts();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading("Settings");
        ui.add_space(6.0);

        ui.checkbox(&mut app.pending.shuffle_questions, "Shuffle questions");
        ui.checkbox(&mut app.pending.shuffle_answers, "Shuffle answers");
        ui.checkbox(&mut app.pending.show_letters, "Show answer letters");
        ui.checkbox(&mut app.pending.show_number, "Show question numbers");
        ui.checkbox(&mut app.pending.show_difficulty, "Show difficulty");

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Mode:");
            ui.radio_value(
                &mut app.pending.presentation_mode,
                PresentationMode::List,
                "Full list",
            );
            ui.radio_value(
                &mut app.pending.presentation_mode,
                PresentationMode::Single,
                "One at a time",
            );
        });
        ui.horizontal(|ui| {
            ui.label("Questions:");
            ui.radio_value(
                &mut app.pending.question_set,
                QuestionSet::All,
                format!("All ({all})"),
            );
            ui.radio_value(
                &mut app.pending.question_set,
                QuestionSet::Smart,
                format!("Smart ({smart})"),
            );
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Apply").clicked() {
                app.apply_settings();
            }
            if ui.button("▶ Start quiz").clicked() {
                app.start_quiz();
            }
            let details_label = if app.session.details_visible {
                "Hide detailed results"
            } else {
                "Show detailed results"
            };
            if ui.button(details_label).clicked() {
                app.toggle_details();
            }
        });
    });
}
