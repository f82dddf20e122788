//! Error types for quiz-core.

use crate::types::Side;
use thiserror::Error;

/// Result type alias using QuestionError.
pub type Result<T> = std::result::Result<T, QuestionError>;

/// Errors that can occur while loading or validating a stored question.
///
/// The matching engine itself never fails; these only surface when a
/// question definition is read from storage or checked by the editor.
#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("invalid question JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("duplicate {side} item id {id}")]
    DuplicateItemId { side: Side, id: String },

    #[error("correct match {left} -> {right} references an unknown {side} item")]
    UnknownMatchItem {
        left: String,
        right: String,
        side: Side,
    },
}
