//! Question and category records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stored trivia question.
///
/// Serializes to the wire shape `{id, question, answer, category, difficulty}`.
/// `category` is a plain reference; it is never checked against the
/// categories table, so a dangling id is returned as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Insert payload for a question.
///
/// Every field is optional: presence is enforced by the store's NOT NULL
/// constraints, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
}

impl NewQuestion {
    /// Materialize a stored question once the store has assigned an id.
    ///
    /// Returns the name of the first missing column, mirroring a NOT NULL
    /// violation.
    pub fn into_question(self, id: i32) -> Result<Question, &'static str> {
        Ok(Question {
            id,
            question: self.question.ok_or("question")?,
            answer: self.answer.ok_or("answer")?,
            category: self.category.ok_or("category")?,
            difficulty: self.difficulty.ok_or("difficulty")?,
        })
    }
}

/// A question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories installed by `trivia db seed` and `serve --memory`
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Category id to type label, ordered by id.
///
/// Integer keys serialize as JSON object keys (`{"1": "Science"}`).
pub type CategoryMap = BTreeMap<i32, String>;

/// Collapse categories into the `{id: type}` map used by the API.
pub fn category_map<I>(categories: I) -> CategoryMap
where
    I: IntoIterator<Item = Category>,
{
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_wire_shape() {
        let q = Question {
            id: 4,
            question: "What is the heaviest organ?".into(),
            answer: "The liver".into(),
            category: 1,
            difficulty: 4,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "question": "What is the heaviest organ?",
                "answer": "The liver",
                "category": 1,
                "difficulty": 4
            })
        );
    }

    #[test]
    fn category_map_uses_string_keys_in_id_order() {
        let map = category_map(vec![
            Category { id: 10, kind: "Sports".into() },
            Category { id: 2, kind: "Art".into() },
        ]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2":"Art","10":"Sports"}"#);
    }

    #[test]
    fn new_question_reports_first_missing_column() {
        let partial = NewQuestion {
            question: Some("Q".into()),
            answer: None,
            difficulty: Some(1),
            category: Some(1),
        };
        assert_eq!(partial.into_question(1).unwrap_err(), "answer");

        let full = NewQuestion {
            question: Some("Q".into()),
            answer: Some("A".into()),
            difficulty: Some(2),
            category: Some(3),
        };
        let q = full.into_question(7).unwrap();
        assert_eq!(q.id, 7);
        assert_eq!(q.category, 3);
    }
}
