use std::fmt;
use std::path::Path;

use crate::model::Question;

#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(err) => write!(f, "could not read question file: {err}"),
            DataError::Parse(err) => write!(f, "could not parse question bank: {err}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err)
    }
}

/// Loads the question bank embedded at compile time.
pub fn read_questions_embedded() -> Result<Vec<Question>, DataError> {
    let file_content = include_str!("data/questions.json");
    Ok(serde_json::from_str(file_content)?)
}

/// Loads a question bank from an external JSON file.
pub fn read_questions_from_path(path: &Path) -> Result<Vec<Question>, DataError> {
    let file_content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&file_content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_parses() {
        let questions = read_questions_embedded().expect("embedded bank must parse");
        assert!(!questions.is_empty());
    }

    #[test]
    fn embedded_bank_has_unique_ids() {
        let questions = read_questions_embedded().expect("embedded bank must parse");
        let mut ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"[{"id": 1, "question": "bare", "answers": [{"text": "x"}]}]"#;
        let questions: Vec<Question> = serde_json::from_str(json).unwrap();
        assert_eq!(questions[0].category, None);
        assert_eq!(questions[0].difficulty, None);
        assert!(!questions[0].answers[0].correct);
    }
}
