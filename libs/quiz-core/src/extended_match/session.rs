//! Per-question session handed to the surrounding question form.

use super::pairing::{MatchState, PairingMachine};
use super::registry::ItemRegistry;
use super::verify::{self, Verdict};
use crate::question::ExtendedMatchQuestion;
use crate::types::{CorrectMatch, EffectiveSettings, Item, Side};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Static data for rendering the answer key next to the user's attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionView<'a> {
    pub shuffled_left: &'a [Item],
    pub shuffled_right: &'a [Item],
    pub correct_matches: &'a [CorrectMatch],
}

/// One submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    /// 1-based attempt number within the session.
    pub attempt: usize,
    pub is_correct: bool,
    pub completed_pairings: usize,
    pub required_pairings: usize,
    pub checked_at: DateTime<Utc>,
}

/// Everything one mounted extended-match question needs.
///
/// Owns the item orderings, the pairing machine and the attempt history.
/// Loading a different question replaces all of it.
#[derive(Debug, Clone)]
pub struct MatchSession {
    instance_id: Uuid,
    question: ExtendedMatchQuestion,
    settings: EffectiveSettings,
    registry: ItemRegistry,
    machine: PairingMachine,
    attempts: Vec<AttemptRecord>,
    rng: StdRng,
}

impl MatchSession {
    /// Session over bare item lists with default settings.
    pub fn initialize(
        left_items: Vec<Item>,
        right_items: Vec<Item>,
        correct_matches: Vec<CorrectMatch>,
    ) -> Self {
        let question = ExtendedMatchQuestion {
            left_items,
            right_items,
            correct_matches,
            ..Default::default()
        };
        Self::new(question, EffectiveSettings::default())
    }

    pub fn new(question: ExtendedMatchQuestion, settings: EffectiveSettings) -> Self {
        Self::with_rng(question, settings, StdRng::from_entropy())
    }

    /// Session whose shuffles are reproducible from `seed`.
    pub fn with_seed(
        question: ExtendedMatchQuestion,
        settings: EffectiveSettings,
        seed: u64,
    ) -> Self {
        Self::with_rng(question, settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        question: ExtendedMatchQuestion,
        settings: EffectiveSettings,
        mut rng: StdRng,
    ) -> Self {
        let dangling = question.dangling_matches();
        if !dangling.is_empty() {
            tracing::warn!(
                question = %question.id,
                count = dangling.len(),
                "answer key references unknown items"
            );
        }

        let left = question.left_items.clone();
        let right = question.right_items.clone();
        let registry = if settings.shuffle_options {
            ItemRegistry::shuffled(left, right, &mut rng)
        } else {
            ItemRegistry::new(left, right)
        };

        Self {
            instance_id: Uuid::new_v4(),
            question,
            settings,
            registry,
            machine: PairingMachine::new(),
            attempts: Vec::new(),
            rng,
        }
    }

    /// Identifier that changes whenever the session is rebuilt.
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn question(&self) -> &ExtendedMatchQuestion {
        &self.question
    }

    pub fn settings(&self) -> EffectiveSettings {
        self.settings
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn state(&self) -> MatchState<'_> {
        self.machine.state()
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// Switch to `question` under the settings of the module it belongs to.
    ///
    /// Everything is rebuilt if the question's identity or options changed.
    /// Otherwise pairings are kept and `settings` applies from the next
    /// reshuffle or submit on. Returns whether the session was rebuilt.
    pub fn load_question(
        &mut self,
        question: ExtendedMatchQuestion,
        settings: EffectiveSettings,
    ) -> bool {
        if question.id == self.question.id && question.same_options(&self.question) {
            self.question.prompt = question.prompt;
            self.settings = settings;
            return false;
        }

        tracing::debug!(from = %self.question.id, to = %question.id, "rebuilding match session");
        let rng = StdRng::from_rng(&mut self.rng).unwrap_or_else(|_| StdRng::from_entropy());
        *self = Self::with_rng(question, settings, rng);
        true
    }

    pub fn select_left(&mut self, id: &str) -> MatchState<'_> {
        self.select(Side::Left, id)
    }

    pub fn select_right(&mut self, id: &str) -> MatchState<'_> {
        self.select(Side::Right, id)
    }

    /// Forward a click to the pairing machine if `id` belongs to `side`.
    pub fn select(&mut self, side: Side, id: &str) -> MatchState<'_> {
        if !self.registry.contains(side, id) {
            tracing::debug!(%side, id, "selection of unknown item ignored");
            return self.machine.state();
        }
        self.machine.select(side, id)
    }

    pub fn remove_line(&mut self, left: &str, right: &str) -> bool {
        self.machine.remove_line(left, right)
    }

    /// Drop all pairings and the highlight, keeping item order.
    pub fn remove_all(&mut self) {
        self.machine.remove_all();
    }

    /// Drop all pairings and the highlight, then reorder both columns.
    pub fn reshuffle(&mut self) {
        self.machine.remove_all();
        if self.settings.shuffle_options {
            self.registry.reshuffle(&mut self.rng);
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.machine.set_disabled(disabled);
    }

    pub fn is_disabled(&self) -> bool {
        self.machine.is_disabled()
    }

    pub fn check_answer(&self) -> bool {
        self.verdict().is_correct
    }

    pub fn verdict(&self) -> Verdict {
        verify::verdict(self.machine.pairings(), &self.question.correct_matches)
    }

    pub fn correction_view(&self) -> CorrectionView<'_> {
        CorrectionView {
            shuffled_left: self.registry.left(),
            shuffled_right: self.registry.right(),
            correct_matches: &self.question.correct_matches,
        }
    }

    /// Form-facing alias of [`MatchSession::remove_all`].
    pub fn reset_selection(&mut self) {
        self.remove_all();
    }

    /// Form-facing alias of [`MatchSession::reshuffle`].
    pub fn reset_and_shuffle_options(&mut self) {
        self.reshuffle();
    }

    /// Form-facing alias of [`MatchSession::correction_view`].
    pub fn return_answer(&self) -> CorrectionView<'_> {
        self.correction_view()
    }

    /// Check and record the current answer.
    ///
    /// A locked session that was already submitted returns its last record
    /// instead of recording a new attempt.
    pub fn submit(&mut self, now: DateTime<Utc>) -> AttemptRecord {
        self.machine.clear_highlight();

        if self.machine.is_disabled() {
            if let Some(last) = self.attempts.last() {
                return last.clone();
            }
        }

        let verdict = self.verdict();
        let record = AttemptRecord {
            attempt: self.attempts.len() + 1,
            is_correct: verdict.is_correct,
            completed_pairings: verdict.completed,
            required_pairings: verdict.required,
            checked_at: now,
        };
        tracing::debug!(
            question = %self.question.id,
            attempt = record.attempt,
            correct = record.is_correct,
            "answer submitted"
        );
        self.attempts.push(record.clone());

        if self.settings.lock_on_submit {
            self.machine.set_disabled(true);
        }
        record
    }

    /// Unlock and clear the drawing for another attempt.
    pub fn retry(&mut self) {
        self.machine.set_disabled(false);
        self.machine.remove_all();
    }
}
