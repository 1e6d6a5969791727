use super::{AnswerLedger, Session};
use crate::model::Question;
use crate::view_models::ScoreLine;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverallStats {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub percent: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
}

impl CategoryStats {
    pub fn percent(&self) -> u32 {
        percent(self.correct, self.total)
    }
}

pub fn percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (100.0 * correct as f64 / total as f64).round() as u32
    }
}

/// Recomputed from the view list and the ledger on every call; there is no
/// cached counter to go stale.
pub fn overall_stats(view: &[Question], ledger: &AnswerLedger) -> OverallStats {
    let mut answered = 0;
    let mut correct = 0;
    for q in view {
        if let Some(rec) = ledger.get(q.id) {
            answered += 1;
            if rec.correct {
                correct += 1;
            }
        }
    }
    OverallStats {
        total: view.len(),
        answered,
        correct,
        percent: percent(correct, view.len()),
    }
}

/// Per-category counts in first-encounter order of the view list.
pub fn by_category_stats(view: &[Question], ledger: &AnswerLedger) -> Vec<(String, CategoryStats)> {
    let mut rows: Vec<(String, CategoryStats)> = Vec::new();
    for q in view {
        let cat = q.category_label();
        let idx = match rows.iter().position(|(name, _)| name == cat) {
            Some(i) => i,
            None => {
                rows.push((cat.to_owned(), CategoryStats::default()));
                rows.len() - 1
            }
        };
        let stats = &mut rows[idx].1;
        stats.total += 1;
        if let Some(rec) = ledger.get(q.id) {
            stats.answered += 1;
            if rec.correct {
                stats.correct += 1;
            }
        }
    }
    rows
}

impl Session {
    pub fn stats(&self) -> OverallStats {
        overall_stats(&self.view, &self.ledger)
    }

    pub fn category_stats(&self) -> Vec<(String, CategoryStats)> {
        by_category_stats(&self.view, &self.ledger)
    }

    /// Headline score. Before Start it reads `0/total (0%)` no matter what
    /// the ledger holds; an explicit override, not a derived fact.
    pub fn score_line(&self) -> ScoreLine {
        let stats = self.stats();
        if self.started {
            ScoreLine {
                correct: stats.correct,
                total: stats.total,
                percent: stats.percent,
            }
        } else {
            ScoreLine {
                correct: 0,
                total: stats.total,
                percent: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_question;

    fn view_of(entries: &[(u32, &str)]) -> Vec<Question> {
        entries
            .iter()
            .map(|(id, cat)| sample_question(*id, cat, true))
            .collect()
    }

    #[test]
    fn overall_stats_counts_only_view_questions() {
        let view = view_of(&[(1, "A"), (2, "A"), (3, "B")]);
        let mut ledger = AnswerLedger::default();
        ledger.record(1, 0, true);
        ledger.record(3, 1, false);
        ledger.record(99, 0, true); // stray id outside the view

        let stats = overall_stats(&view, &ledger);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.answered, 2);
        assert_eq!(stats.correct, 1);
        assert_eq!(stats.percent, 33);
    }

    #[test]
    fn category_rows_sum_to_overall() {
        let view = view_of(&[(1, "A"), (2, "B"), (3, "A"), (4, "C"), (5, "B")]);
        let mut ledger = AnswerLedger::default();
        ledger.record(1, 0, true);
        ledger.record(2, 0, false);
        ledger.record(4, 0, true);

        let overall = overall_stats(&view, &ledger);
        let rows = by_category_stats(&view, &ledger);

        let answered: usize = rows.iter().map(|(_, s)| s.answered).sum();
        let correct: usize = rows.iter().map(|(_, s)| s.correct).sum();
        let total: usize = rows.iter().map(|(_, s)| s.total).sum();
        assert_eq!(answered, overall.answered);
        assert_eq!(correct, overall.correct);
        assert_eq!(total, overall.total);

        // First-encounter order of the view list.
        let names: Vec<&str> = rows.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn percent_is_zero_for_empty_view() {
        let ledger = AnswerLedger::default();
        let stats = overall_stats(&[], &ledger);
        assert_eq!(stats.percent, 0);
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
    }

    #[test]
    fn score_line_reads_zero_before_start() {
        let mut session = Session {
            view: view_of(&[(1, "A"), (2, "A")]),
            ..Session::default()
        };
        // Deliberately stray entries: the override must hold anyway.
        session.ledger.record(1, 0, true);
        session.ledger.record(2, 0, true);

        assert_eq!(session.score_line().label(), "Score: 0/2 (0%)");

        session.started = true;
        assert_eq!(session.score_line().label(), "Score: 2/2 (100%)");
    }
}
