//! Quiz candidate scoping and random selection

use std::collections::HashSet;

use rand::Rng;

use crate::error::QuizError;
use crate::models::Question;

/// Category type sentinel meaning "all categories"
pub const ALL_CATEGORIES: &str = "click";

/// Category descriptor sent by quiz clients: `{type, id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCategory {
    pub kind: Option<String>,
    pub id: Option<i32>,
}

/// Which categories a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i32),
}

impl TryFrom<&QuizCategory> for QuizScope {
    type Error = QuizError;

    /// The `"click"` sentinel ignores the id entirely; any other type
    /// requires one. A descriptor without a type is rejected.
    fn try_from(category: &QuizCategory) -> Result<Self, Self::Error> {
        match category.kind.as_deref() {
            None => Err(QuizError::MissingType),
            Some(ALL_CATEGORIES) => Ok(Self::All),
            Some(kind) => category
                .id
                .map(Self::Category)
                .ok_or_else(|| QuizError::MissingCategoryId {
                    kind: kind.to_owned(),
                }),
        }
    }
}

impl QuizScope {
    pub fn admits(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => question.category == *id,
        }
    }
}

/// Questions in `scope` whose id has not been shown yet.
pub fn candidates<'a, I>(questions: I, scope: QuizScope, previous: &HashSet<i32>) -> Vec<Question>
where
    I: IntoIterator<Item = &'a Question>,
{
    questions
        .into_iter()
        .filter(|q| scope.admits(q) && !previous.contains(&q.id))
        .cloned()
        .collect()
}

/// Pick one candidate uniformly at random; `None` when the pool is exhausted.
pub fn pick<R>(mut candidates: Vec<Question>, rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
