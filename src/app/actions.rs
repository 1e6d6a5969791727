use super::QuizApp;
use crate::model::AnswerFilter;

impl QuizApp {
    /// Apply: snapshot the widget settings, wipe answers and start a fresh
    /// epoch. Whether the quiz is running is left as-is.
    pub fn apply_settings(&mut self) {
        self.session.settings = self.pending.clone();
        self.session.ledger.clear();
        self.session.filter = AnswerFilter::All;
        self.session.single_index = 0;
        if !self.session.started {
            self.session.details_visible = false;
        }
        self.session.invalidate_view();
        self.message.clear();
    }

    /// Start: snapshot the widget settings and begin the quiz with details
    /// open. Recorded answers are kept; only the order is rebuilt.
    pub fn start_quiz(&mut self) {
        self.session.settings = self.pending.clone();
        self.session.started = true;
        self.session.details_visible = true;
        self.session.filter = AnswerFilter::All;
        self.session.single_index = 0;
        self.session.invalidate_view();
        self.scroll_to_results = true;
        self.message.clear();
    }

    /// Reset: back to the not-started screen. Keeps the last applied
    /// settings rather than re-reading the widgets.
    pub fn reset_quiz(&mut self) {
        self.session.ledger.clear();
        self.session.filter = AnswerFilter::All;
        self.session.single_index = 0;
        self.session.started = false;
        self.session.details_visible = false;
        self.session.invalidate_view();
        self.message.clear();
    }

    /// Details can only be toggled while running; before Start they stay
    /// hidden.
    pub fn toggle_details(&mut self) {
        if self.session.started {
            self.session.details_visible = !self.session.details_visible;
        } else {
            self.session.details_visible = false;
        }
    }

    /// Changing the filter moves the single-mode cursor back to the first
    /// visible question. Ledger and epoch are untouched.
    pub fn set_filter(&mut self, filter: AnswerFilter) {
        self.session.filter = filter;
        self.session.single_index = 0;
    }

    /// Moves the single-mode cursor; the render pass clamps it against the
    /// filtered list.
    pub fn navigate(&mut self, delta: i32) {
        if delta.is_negative() {
            self.session.single_index = self
                .session
                .single_index
                .saturating_sub(delta.unsigned_abs() as usize);
        } else {
            self.session.single_index = self
                .session
                .single_index
                .saturating_add(delta as usize);
        }
    }

    /// First answer wins; repeated clicks on an answered question are
    /// silently ignored. Correctness comes from the view copy, whose answer
    /// order is what the user saw.
    pub fn submit_answer(&mut self, question_id: u32, answer_index: usize) -> bool {
        let Some(correct) = self
            .session
            .view
            .iter()
            .find(|q| q.id == question_id)
            .and_then(|q| q.answers.get(answer_index))
            .map(|a| a.correct)
        else {
            return false;
        };

        let recorded = self.session.ledger.record(question_id, answer_index, correct);
        if recorded {
            log::debug!("answer recorded: question {question_id}, option {answer_index}");
        }
        recorded
    }
}
