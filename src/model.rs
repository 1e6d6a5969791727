use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "Uncategorized";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub question: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// "Smart" question: the correct answer is not among the longest options.
    /// A question with no correct answer marked counts as smart.
    pub fn is_smart(&self) -> bool {
        let Some(correct) = self.answers.iter().find(|a| a.correct) else {
            return true;
        };
        let max_len = self
            .answers
            .iter()
            .map(|a| a.text.chars().count())
            .max()
            .unwrap_or(0);
        correct.text.chars().count() < max_len
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationMode {
    List,
    Single,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionSet {
    Smart,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnswerFilter {
    #[default]
    All,
    Answered,
    Unanswered,
    Correct,
    Wrong,
}

impl AnswerFilter {
    pub const TABS: [AnswerFilter; 5] = [
        AnswerFilter::All,
        AnswerFilter::Answered,
        AnswerFilter::Unanswered,
        AnswerFilter::Correct,
        AnswerFilter::Wrong,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnswerFilter::All => "All",
            AnswerFilter::Answered => "Answered",
            AnswerFilter::Unanswered => "Unanswered",
            AnswerFilter::Correct => "Correct",
            AnswerFilter::Wrong => "Wrong",
        }
    }
}

/// Presentation settings. Applied atomically via Apply/Start, never
/// per-field-change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub shuffle_questions: bool,
    pub shuffle_answers: bool,
    pub show_letters: bool,
    pub show_number: bool,
    pub show_difficulty: bool,
    pub presentation_mode: PresentationMode,
    pub question_set: QuestionSet,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            shuffle_questions: true,
            shuffle_answers: true,
            show_letters: true,
            show_number: true,
            show_difficulty: true,
            presentation_mode: PresentationMode::List,
            question_set: QuestionSet::All,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Quiz,
    LoadError,
}
