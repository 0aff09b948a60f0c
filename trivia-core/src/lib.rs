//! trivia-core: domain types and pure query logic for the trivia API
//!
//! Everything here is storage- and transport-agnostic:
//! - `models`: questions, categories and the category map
//! - `pagination`: fixed-size page windows
//! - `filter`: listing/search/category predicates
//! - `quiz`: candidate scoping and random selection
//! - `config`: layered configuration file model

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod quiz;

pub use config::TriviaConfig;
pub use error::{ConfigError, QuizError};
pub use filter::QuestionFilter;
pub use models::{category_map, Category, CategoryMap, NewQuestion, Question, DEFAULT_CATEGORIES};
pub use pagination::{paginate, Paginated, Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use quiz::{QuizCategory, QuizScope, ALL_CATEGORIES};
