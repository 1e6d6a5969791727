use rand::Rng;

use super::Session;
use crate::model::{Question, QuestionSet, SessionSettings};
use crate::shuffle::shuffled;

/// Builds the working question list for one epoch:
/// smart filter, category grouping in first-encounter order, optional
/// per-group question shuffle, then a deep copy of every question with an
/// optional answer shuffle. The catalog itself is never touched.
pub fn build_view<R: Rng + ?Sized>(
    catalog: &[Question],
    settings: &SessionSettings,
    rng: &mut R,
) -> Vec<Question> {
    let mut pool: Vec<&Question> = catalog.iter().collect();
    if settings.question_set == QuestionSet::Smart {
        pool.retain(|q| q.is_smart());
    }

    // Group by category, keeping the order categories first appear in.
    let mut groups: Vec<(&str, Vec<&Question>)> = Vec::new();
    for q in pool {
        let cat = q.category_label();
        match groups.iter().position(|(name, _)| *name == cat) {
            Some(i) => groups[i].1.push(q),
            None => groups.push((cat, vec![q])),
        }
    }

    let mut ordered: Vec<&Question> = Vec::new();
    for (_, members) in groups {
        if settings.shuffle_questions {
            ordered.extend(shuffled(&members, rng));
        } else {
            ordered.extend(members);
        }
    }

    ordered
        .into_iter()
        .map(|q| {
            let mut copy = q.clone();
            if settings.shuffle_answers {
                copy.answers = shuffled(&copy.answers, rng);
            }
            copy
        })
        .collect()
}

impl Session {
    /// Builds the view list at most once per epoch. Safe to call on every
    /// render; the order only changes after `invalidate_view`.
    pub fn ensure_view(&mut self, catalog: &[Question]) {
        if self.view_built {
            return;
        }
        self.view = build_view(catalog, &self.settings, &mut rand::thread_rng());
        self.view_built = true;
        log::debug!("view rebuilt: {} questions", self.view.len());
    }

    /// Marks the epoch dirty so the next render rebuilds the order.
    pub fn invalidate_view(&mut self) {
        self.view_built = false;
        self.view.clear();
    }
}
