//! Catalog module - The static questionnaire and the answers given to it.
//!
//! Questions are loaded once from an external JSON or YAML document and never
//! mutated afterwards. Each question maps to one or more sustainability goals.

mod answer_set;
mod question;
mod question_catalog;

pub use answer_set::AnswerSet;
pub use question::{AnswerOption, AnswerValue, Question, OPTION_LABEL_MARKER};
pub use question_catalog::{CatalogError, QuestionCatalog};
