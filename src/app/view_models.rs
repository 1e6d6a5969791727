use super::QuizApp;
use super::stats::OverallStats;
use crate::view_models::{CategoryRow, ScoreLine};

impl QuizApp {
    pub fn score_line(&self) -> ScoreLine {
        self.session.score_line()
    }

    pub fn overall(&self) -> OverallStats {
        self.session.stats()
    }

    pub fn category_rows(&self) -> Vec<CategoryRow> {
        self.session
            .category_stats()
            .into_iter()
            .map(|(category, s)| CategoryRow {
                category,
                total: s.total,
                answered: s.answered,
                correct: s.correct,
                percent: s.percent(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_question;

    #[test]
    fn category_rows_follow_view_order() {
        let mut app = QuizApp::with_catalog(vec![
            sample_question(1, "B", true),
            sample_question(2, "A", true),
            sample_question(3, "B", true),
        ]);
        app.pending.shuffle_questions = false;
        app.pending.shuffle_answers = false;
        app.start_quiz();
        let catalog = app.catalog.clone();
        app.session.ensure_view(&catalog);
        app.submit_answer(1, 0);

        let rows = app.category_rows();
        let names: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(rows[0].total, 2);
        assert_eq!(rows[0].correct, 1);
        assert_eq!(rows[0].percent, 50);
        assert_eq!(rows[1].answered, 0);
    }
}
