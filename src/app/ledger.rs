use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::SystemTime;

/// What the user picked for one question. Never mutated after insertion.
#[derive(Clone, Debug)]
pub struct AnswerRecord {
    pub chosen_index: usize,
    pub correct: bool,
    pub answered_at: SystemTime,
}

/// One answer outcome per question id, write-once per key.
#[derive(Default, Debug)]
pub struct AnswerLedger {
    entries: HashMap<u32, AnswerRecord>,
}

impl AnswerLedger {
    /// Records the first answer for `question_id`. Returns `false` and leaves
    /// the existing record untouched if the question was already answered.
    pub fn record(&mut self, question_id: u32, chosen_index: usize, correct: bool) -> bool {
        match self.entries.entry(question_id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(AnswerRecord {
                    chosen_index,
                    correct,
                    answered_at: SystemTime::now(),
                });
                true
            }
        }
    }

    pub fn get(&self, question_id: u32) -> Option<&AnswerRecord> {
        self.entries.get(&question_id)
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.entries.contains_key(&question_id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_write_once_per_question() {
        let mut ledger = AnswerLedger::default();

        assert!(ledger.record(3, 0, true));
        assert!(!ledger.record(3, 2, false));

        let rec = ledger.get(3).expect("first record kept");
        assert_eq!(rec.chosen_index, 0);
        assert!(rec.correct);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let mut ledger = AnswerLedger::default();
        ledger.record(1, 0, true);
        ledger.record(2, 1, false);

        ledger.clear();

        assert!(ledger.is_empty());
        assert!(!ledger.contains(1));
        // After clearing, the question may be answered again.
        assert!(ledger.record(1, 1, false));
    }
}
