//! Display-facing value types handed to the UI layer.

/// The headline score, already subject to the pre-start override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

impl ScoreLine {
    pub fn label(&self) -> String {
        format!("Score: {}/{} ({}%)", self.correct, self.total, self.percent)
    }
}

/// One row of the per-category summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: String,
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub percent: u32,
}

impl CategoryRow {
    pub fn detail_label(&self) -> String {
        format!(
            "Total: {} • Answered: {} • Correct: {}",
            self.total, self.answered, self.correct
        )
    }
}

/// Cursor position in single-question mode, 1-based for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinglePos {
    pub position: usize,
    pub len: usize,
}

impl SinglePos {
    pub fn label(&self) -> String {
        format!("{} / {}", self.position, self.len)
    }
}

/// Letter label for answer index `i`: 0 -> 'a', 1 -> 'b', ...
pub fn answer_letter(i: usize) -> char {
    (b'a' + (i % 26) as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_line_label() {
        let s = ScoreLine {
            correct: 3,
            total: 10,
            percent: 30,
        };
        assert_eq!(s.label(), "Score: 3/10 (30%)");
    }

    #[test]
    fn single_pos_label() {
        let p = SinglePos {
            position: 3,
            len: 3,
        };
        assert_eq!(p.label(), "3 / 3");
    }

    #[test]
    fn answer_letters() {
        assert_eq!(answer_letter(0), 'a');
        assert_eq!(answer_letter(3), 'd');
    }
}
