//! Core quiz library for the study application.
//!
//! Provides:
//! - Stored question definitions for extended-match questions
//! - The extended-match pairing engine (selection state machine, answer check)
//! - Shared types (Item, CorrectMatch, settings)

pub mod error;
pub mod extended_match;
pub mod question;
pub mod types;

pub use error::{QuestionError, Result};
pub use extended_match::{
    check_answer, AttemptRecord, CorrectionView, ItemRegistry, MatchSession, MatchState, Pairing,
    PairingMachine, SelectionHighlight, TailState, Verdict,
};
pub use question::{parse_question, ExtendedMatchQuestion};
pub use types::{CorrectMatch, EffectiveSettings, Item, ItemId, ModuleSettings, QuizSettings, Side};
