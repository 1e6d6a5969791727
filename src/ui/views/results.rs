use egui::{Align, Color32, Layout, ProgressBar, RichText, Ui};

use crate::app::{QuizApp, Session};
use crate::model::{AnswerFilter, PresentationMode, Question};
use crate::view_models::answer_letter;

const GOOD: Color32 = Color32::from_rgb(46, 160, 67);
const BAD: Color32 = Color32::from_rgb(218, 54, 51);

pub fn ui_results(app: &mut QuizApp, ui: &mut Ui) {
    let stats = app.overall();
    ui.horizontal(|ui| {
        ui.label(format!("Total: {}", stats.total));
        ui.label(format!("Answered: {}", stats.answered));
        ui.label(format!("Correct: {}", stats.correct));
        ui.label(format!("Success: {}%", stats.percent));
    });

    // Before Start, or while details are hidden, the region stays empty.
    if !app.session.started || !app.session.details_visible {
        return;
    }

    let heading = ui.heading("Results");
    if app.scroll_to_results {
        heading.scroll_to_me(Some(Align::TOP));
        app.scroll_to_results = false;
    }

    ui.add_space(6.0);
    for row in app.category_rows() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&row.category).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!("{}%", row.percent));
            });
        });
        ui.label(RichText::new(row.detail_label()).weak());
        ui.add(ProgressBar::new(row.percent as f32 / 100.0));
        ui.add_space(4.0);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        for filter in AnswerFilter::TABS {
            if ui
                .selectable_label(app.session.filter == filter, filter.label())
                .clicked()
            {
                app.set_filter(filter);
            }
        }
    });
    ui.add_space(8.0);

    match app.session.settings.presentation_mode {
        PresentationMode::List => ui_question_list(app, ui),
        PresentationMode::Single => ui_single_question(app, ui),
    }
}

fn ui_question_list(app: &mut QuizApp, ui: &mut Ui) {
    let cards: Vec<Question> = app.session.filtered_view().into_iter().cloned().collect();
    if cards.is_empty() {
        ui.label("No questions match the selected filter.");
        return;
    }

    let mut clicked = None;
    for q in &cards {
        question_card(&app.session, q, ui, &mut clicked);
        ui.add_space(6.0);
    }
    if let Some((question_id, answer_index)) = clicked {
        app.submit_answer(question_id, answer_index);
    }
}

fn ui_single_question(app: &mut QuizApp, ui: &mut Ui) {
    let filtered_len = app.session.filtered_view().len();
    app.session.clamp_cursor(filtered_len);

    ui.horizontal(|ui| {
        if ui.button("◀ Prev").clicked() {
            app.navigate(-1);
        }
        ui.label(app.session.single_position(filtered_len).label());
        if ui.button("Next ▶").clicked() {
            app.navigate(1);
        }
    });
    ui.add_space(6.0);

    // Re-clamp so a click above cannot leave the cursor past the end.
    app.session.clamp_cursor(filtered_len);
    let current: Option<Question> = app
        .session
        .filtered_view()
        .get(app.session.single_index)
        .map(|q| (*q).clone());

    let Some(q) = current else {
        ui.label("No questions match the selected filter.");
        return;
    };

    let mut clicked = None;
    question_card(&app.session, &q, ui, &mut clicked);
    if let Some((question_id, answer_index)) = clicked {
        app.submit_answer(question_id, answer_index);
    }
}

fn question_card(
    session: &Session,
    q: &Question,
    ui: &mut Ui,
    clicked: &mut Option<(u32, usize)>,
) {
    let rec = session.ledger.get(q.id);
    let settings = &session.settings;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            if settings.show_number {
                ui.label(RichText::new(format!("Question {}", q.id)).weak());
            }
            if settings.show_difficulty {
                if let Some(difficulty) = &q.difficulty {
                    ui.label(RichText::new(difficulty).weak());
                }
            }
            ui.label(RichText::new(q.category_label()).weak());

            if session.reveal_results {
                if let Some(rec) = rec {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if rec.correct {
                            ui.colored_label(GOOD, "Correct");
                        } else {
                            ui.colored_label(BAD, "Wrong");
                        }
                    });
                }
            }
        });

        ui.label(RichText::new(&q.question).strong());
        ui.add_space(4.0);

        for (i, answer) in q.answers.iter().enumerate() {
            let mut text = String::new();
            if settings.show_letters {
                text.push(answer_letter(i));
                text.push_str(") ");
            }
            text.push_str(&answer.text);

            let mut rich = RichText::new(text);
            if session.reveal_results {
                if let Some(rec) = rec {
                    let chosen = rec.chosen_index == i;
                    if chosen && rec.correct {
                        rich = rich.color(GOOD);
                    } else if chosen {
                        rich = rich.color(BAD);
                    } else if answer.correct && !rec.correct {
                        // The chosen answer was wrong: reveal every correct one.
                        rich = rich.color(GOOD);
                    }
                }
            }

            let response = ui.add(egui::Button::new(rich).frame(false));
            if response.clicked() && rec.is_none() {
                *clicked = Some((q.id, i));
            }
        }
    });
}
