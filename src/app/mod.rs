use std::path::Path;

use egui::Visuals;
use serde::{Deserialize, Serialize};

use crate::data;
use crate::model::{AnswerFilter, AppState, Question, SessionSettings};
use crate::view_models::SinglePos;

pub mod actions;
pub mod ledger;
pub mod stats;
pub mod view;
pub mod view_models;

pub use ledger::{AnswerLedger, AnswerRecord};

/// All state belonging to one quiz run. Owned by the controller and handed
/// by reference to the view builder and the stats aggregator, so tests can
/// run independent sessions side by side.
pub struct Session {
    pub settings: SessionSettings,
    /// Working copy of the catalog for the current epoch; rebuilt only on
    /// Apply/Start/Reset, never on render.
    pub view: Vec<Question>,
    pub view_built: bool,
    pub ledger: AnswerLedger,
    pub started: bool,
    pub details_visible: bool,
    pub reveal_results: bool,
    pub filter: AnswerFilter,
    pub single_index: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            settings: SessionSettings::default(),
            view: Vec::new(),
            view_built: false,
            ledger: AnswerLedger::default(),
            started: false,
            details_visible: false,
            reveal_results: true,
            filter: AnswerFilter::default(),
            single_index: 0,
        }
    }
}

impl Session {
    pub fn question_visible(&self, question: &Question) -> bool {
        let rec = self.ledger.get(question.id);
        match self.filter {
            AnswerFilter::All => true,
            AnswerFilter::Answered => rec.is_some(),
            AnswerFilter::Unanswered => rec.is_none(),
            AnswerFilter::Correct => rec.is_some_and(|r| r.correct),
            AnswerFilter::Wrong => rec.is_some_and(|r| !r.correct),
        }
    }

    /// The subset of the view list the active filter lets through. Filtering
    /// never reorders or mutates the view list itself.
    pub fn filtered_view(&self) -> Vec<&Question> {
        self.view
            .iter()
            .filter(|q| self.question_visible(q))
            .collect()
    }

    /// Keeps the single-mode cursor inside `[0, len - 1]`. Called on every
    /// render; clamping, not wraparound, is the edge policy.
    pub fn clamp_cursor(&mut self, filtered_len: usize) {
        if filtered_len == 0 {
            self.single_index = 0;
        } else if self.single_index > filtered_len - 1 {
            self.single_index = filtered_len - 1;
        }
    }

    /// 1-based cursor display, `0 / 0` when nothing matches the filter.
    pub fn single_position(&self, filtered_len: usize) -> SinglePos {
        if filtered_len == 0 {
            SinglePos {
                position: 0,
                len: 0,
            }
        } else {
            SinglePos {
                position: self.single_index.min(filtered_len - 1) + 1,
                len: filtered_len,
            }
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
pub struct QuizApp {
    /// Light/dark preference, the only field that survives a restart.
    pub dark_mode: bool,
    #[serde(skip)]
    pub catalog: Vec<Question>,
    /// Settings as currently shown in the widgets; copied into the session
    /// only when Apply or Start fires.
    #[serde(skip)]
    pub pending: SessionSettings,
    #[serde(skip)]
    pub session: Session,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub message: String,
    #[serde(skip)]
    pub scroll_to_results: bool,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>, source: Option<&Path>) -> Self {
        let mut app: QuizApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let loaded = match source {
            Some(path) => data::read_questions_from_path(path),
            None => data::read_questions_embedded(),
        };
        match loaded {
            Ok(catalog) => {
                let (all, smart) = catalog_counts(&catalog);
                log::info!("question bank loaded: {all} questions, {smart} smart");
                app.catalog = catalog;
            }
            Err(err) => {
                log::error!("question bank unavailable: {err}");
                app.state = AppState::LoadError;
                app.message = err.to_string();
            }
        }

        cc.egui_ctx.set_visuals(if app.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        app
    }

    /// Entry point for tests and embedders that already hold a catalog.
    pub fn with_catalog(catalog: Vec<Question>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog_counts(&self) -> (usize, usize) {
        catalog_counts(&self.catalog)
    }
}

/// (all, smart) counts shown next to the question-set radios.
pub fn catalog_counts(catalog: &[Question]) -> (usize, usize) {
    let smart = catalog.iter().filter(|q| q.is_smart()).count();
    (catalog.len(), smart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;

    pub(crate) fn sample_question(id: u32, category: &str, smart: bool) -> Question {
        // The correct answer is the longest option unless `smart`.
        let correct_text = if smart { "short" } else { "the longest answer there is" };
        Question {
            id,
            question: format!("question {id}"),
            category: Some(category.to_owned()),
            difficulty: Some("easy".to_owned()),
            answers: vec![
                Answer {
                    text: correct_text.to_owned(),
                    correct: true,
                },
                Answer {
                    text: "a medium distractor here".to_owned(),
                    correct: false,
                },
                Answer {
                    text: "nope".to_owned(),
                    correct: false,
                },
            ],
        }
    }

    #[test]
    fn catalog_counts_reports_all_and_smart() {
        let catalog = vec![
            sample_question(1, "A", true),
            sample_question(2, "A", false),
            sample_question(3, "B", true),
            sample_question(4, "B", false),
            sample_question(5, "C", false),
        ];
        assert_eq!(catalog_counts(&catalog), (5, 2));
    }

    #[test]
    fn cursor_clamps_to_filtered_bounds() {
        let mut session = Session::default();
        session.single_index = 9;

        session.clamp_cursor(3);
        assert_eq!(session.single_index, 2);

        session.clamp_cursor(0);
        assert_eq!(session.single_index, 0);
    }

    #[test]
    fn single_position_is_one_based_and_empty_safe() {
        let mut session = Session::default();
        session.single_index = 2;
        assert_eq!(session.single_position(3).label(), "3 / 3");
        assert_eq!(session.single_position(0).label(), "0 / 0");
    }
}
