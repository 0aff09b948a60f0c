//! Request body schemas
//!
//! Fields are tri-state so "absent", "null" and "present" stay distinct:
//! a truthy `searchTerm` selects search, and the quiz fields must
//! be present and non-null.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use trivia_core::{NewQuestion, QuizCategory};

use super::error::ApiError;

/// A JSON field that may be absent, explicitly null, or set.
///
/// Use with `#[serde(default)]` so a missing key becomes `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Absent,
    Null,
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Field<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Present(v),
            None => Self::Null,
        })
    }
}

/// Integer that also accepts a numeric string (`3` or `"3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LenientInt(pub i32);

impl<'de> Deserialize<'de> for LenientInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        let value = match Raw::deserialize(deserializer)? {
            Raw::Int(n) => i32::try_from(n).map_err(serde::de::Error::custom)?,
            Raw::Text(s) => s.trim().parse::<i32>().map_err(serde::de::Error::custom)?,
        };
        Ok(Self(value))
    }
}

/// POST /questions body, shared by create and search
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsBody {
    #[serde(default)]
    pub question: Field<String>,
    #[serde(default)]
    pub answer: Field<String>,
    #[serde(default)]
    pub difficulty: Field<LenientInt>,
    #[serde(default)]
    pub category: Field<LenientInt>,
    #[serde(default, rename = "searchTerm")]
    pub search_term: Field<Value>,
}

/// What a POST /questions body asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsAction {
    Search(String),
    Create(NewQuestion),
}

impl QuestionsBody {
    /// A truthy `searchTerm` wins over every other field.
    ///
    /// `null`, `""`, `false`, `0`, `[]` and `{}` mean create. Other numbers
    /// and `true` are searched for as text; a non-empty array or object is
    /// unprocessable.
    pub fn into_action(self) -> Result<QuestionsAction, ApiError> {
        let term = match self.search_term.into_option() {
            Some(value) => search_text(value)?,
            None => None,
        };

        Ok(match term {
            Some(term) => QuestionsAction::Search(term),
            None => QuestionsAction::Create(NewQuestion {
                question: self.question.into_option(),
                answer: self.answer.into_option(),
                difficulty: self.difficulty.into_option().map(|d| d.0),
                category: self.category.into_option().map(|c| c.0),
            }),
        })
    }
}

fn search_text(value: Value) -> Result<Option<String>, ApiError> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Array(items) if items.is_empty() => Ok(None),
        Value::Object(fields) if fields.is_empty() => Ok(None),
        Value::Array(_) | Value::Object(_) => {
            Err(ApiError::unprocessable("searchTerm must be a scalar"))
        }
    }
}

/// POST /quizzes body
#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub quiz_category: Field<QuizCategoryBody>,
    #[serde(default)]
    pub previous_questions: Field<Vec<LenientInt>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizCategoryBody {
    #[serde(default, rename = "type")]
    pub kind: Field<String>,
    #[serde(default)]
    pub id: Field<LenientInt>,
}

/// Validated quiz request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub category: QuizCategory,
    pub previous: HashSet<i32>,
}

impl QuizBody {
    /// Both fields are required; absent and null are rejected alike.
    pub fn into_request(self) -> Result<QuizRequest, ApiError> {
        let category = self
            .quiz_category
            .into_option()
            .ok_or_else(|| ApiError::unprocessable("quiz_category is required"))?;
        let previous = self
            .previous_questions
            .into_option()
            .ok_or_else(|| ApiError::unprocessable("previous_questions is required"))?;

        Ok(QuizRequest {
            category: QuizCategory {
                kind: category.kind.into_option(),
                id: category.id.into_option().map(|id| id.0),
            },
            previous: previous.into_iter().map(|id| id.0).collect(),
        })
    }
}
