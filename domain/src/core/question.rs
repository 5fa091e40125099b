//! Question value object

use serde::{Deserialize, Serialize};

/// A single question about a document (Value Object)
///
/// Always trimmed and never empty. Serializes as a bare JSON string so a
/// `Vec<Question>` goes over the wire as `string[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a question, returning None if it is blank
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// Split comma-separated text into trimmed, non-empty pieces.
///
/// Order is preserved and duplicates are kept.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the questions field into individual questions.
pub fn parse_questions(text: &str) -> Vec<Question> {
    text.split(',').filter_map(Question::try_new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_trims() {
        let q = Question::try_new("  What is covered?  ").unwrap();
        assert_eq!(q.content(), "What is covered?");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   ").is_none());
    }

    #[test]
    fn test_parse_questions_drops_blank_pieces() {
        let questions: Vec<String> = parse_questions("a, b ,,c")
            .into_iter()
            .map(Question::into_content)
            .collect();
        assert_eq!(questions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_questions_keeps_order_and_duplicates() {
        let questions: Vec<String> = parse_questions("x, y, x")
            .into_iter()
            .map(Question::into_content)
            .collect();
        assert_eq!(questions, vec!["x", "y", "x"]);
    }

    #[test]
    fn test_parse_questions_only_separators() {
        assert!(parse_questions(" , ,, ").is_empty());
    }

    #[test]
    fn test_split_list_matches_question_parsing() {
        assert_eq!(split_list("a, b ,,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let q = Question::try_new("Is surgery covered?").unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "\"Is surgery covered?\"");
    }
}
