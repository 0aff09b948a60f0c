//! Question listing filters

use crate::models::Question;

/// Which questions a listing covers. Results are always ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    /// Every question
    All,
    /// Question text contains the term, ignoring case
    Search(String),
    /// Question belongs to the category id
    Category(i32),
}

impl QuestionFilter {
    /// Whether `question` passes this filter.
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Search(term) => contains_ignore_case(&question.question, term),
            Self::Category(id) => question.category == *id,
        }
    }
}

/// Case-insensitive substring test. No tokenization and no wildcards.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
