//! Pairing state machine.
//!
//! Selection events from either column grow an ordered list of pairings.
//! The list never holds more than one incomplete pairing (always the last
//! one) and never holds two identical complete pairings.
//!
//! Transitions for a selection of `id` on `side`:
//!
//! | tail of the list                  | effect                                        |
//! |-----------------------------------|-----------------------------------------------|
//! | empty or complete                 | push `{side: id}`, highlight the other column |
//! | incomplete, set on the other side | complete it unless that would duplicate       |
//! | incomplete, set on the same side  | re-target it to `id`                          |

use crate::types::{ItemId, Side};
use serde::{Deserialize, Serialize};

/// A line between a left and a right item, possibly still in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<ItemId>,
}

impl Pairing {
    /// Complete pairing between two ids.
    pub fn complete(left: impl Into<ItemId>, right: impl Into<ItemId>) -> Self {
        Self {
            left: Some(left.into()),
            right: Some(right.into()),
        }
    }

    /// Pairing with only one endpoint chosen.
    pub fn started(side: Side, id: impl Into<ItemId>) -> Self {
        let mut pairing = Self::default();
        pairing.set(side, id.into());
        pairing
    }

    pub fn get(&self, side: Side) -> Option<&str> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    fn set(&mut self, side: Side, id: ItemId) {
        match side {
            Side::Left => self.left = Some(id),
            Side::Right => self.right = Some(id),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Exactly one endpoint is set.
    pub fn is_incomplete(&self) -> bool {
        self.left.is_some() != self.right.is_some()
    }

    /// Whether this is the complete pairing `left -> right`.
    pub fn connects(&self, left: &str, right: &str) -> bool {
        self.left.as_deref() == Some(left) && self.right.as_deref() == Some(right)
    }
}

/// Transient rendering hint for the in-progress selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionHighlight {
    pub selected_item_id: Option<ItemId>,
    /// Column the user is expected to pick from next.
    pub highlighted_side: Option<Side>,
}

impl SelectionHighlight {
    fn pending(id: &str, side: Side) -> Self {
        Self {
            selected_item_id: Some(id.to_string()),
            highlighted_side: Some(side.opposite()),
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.selected_item_id.is_none() && self.highlighted_side.is_none()
    }
}

/// Shape of the tail of the pairing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailState {
    Empty,
    /// Last pairing has only the given side set.
    TrailingIncomplete(Side),
    TrailingComplete,
}

/// Borrowed view handed to renderers after every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchState<'a> {
    pub pairings: &'a [Pairing],
    pub highlight: &'a SelectionHighlight,
}

/// Owner of the pairing list and selection highlight.
#[derive(Debug, Clone, Default)]
pub struct PairingMachine {
    pairings: Vec<Pairing>,
    highlight: SelectionHighlight,
    disabled: bool,
}

impl PairingMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MatchState<'_> {
        MatchState {
            pairings: &self.pairings,
            highlight: &self.highlight,
        }
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn highlight(&self) -> &SelectionHighlight {
        &self.highlight
    }

    pub fn tail(&self) -> TailState {
        match self.pairings.last() {
            None => TailState::Empty,
            Some(last) if last.is_complete() => TailState::TrailingComplete,
            Some(last) if last.left.is_some() => TailState::TrailingIncomplete(Side::Left),
            Some(_) => TailState::TrailingIncomplete(Side::Right),
        }
    }

    /// Complete pairings in creation order.
    pub fn complete_pairings(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter().filter(|p| p.is_complete())
    }

    /// The in-progress pairing, if any.
    pub fn incomplete(&self) -> Option<&Pairing> {
        self.pairings.last().filter(|p| p.is_incomplete())
    }

    pub fn select_left(&mut self, id: &str) -> MatchState<'_> {
        self.select(Side::Left, id)
    }

    pub fn select_right(&mut self, id: &str) -> MatchState<'_> {
        self.select(Side::Right, id)
    }

    /// Process a click on item `id` in column `side`.
    pub fn select(&mut self, side: Side, id: &str) -> MatchState<'_> {
        if self.disabled {
            tracing::debug!(%side, id, "selection ignored while disabled");
            return self.state();
        }

        match self.tail() {
            TailState::Empty | TailState::TrailingComplete => {
                self.pairings.push(Pairing::started(side, id));
                self.highlight = SelectionHighlight::pending(id, side);
            }
            TailState::TrailingIncomplete(set) if set == side => {
                // Last click on the same column wins.
                if let Some(last) = self.pairings.last_mut() {
                    last.set(side, id.to_string());
                }
                self.highlight = SelectionHighlight::pending(id, side);
            }
            TailState::TrailingIncomplete(_) => self.complete_tail(side, id),
        }

        self.state()
    }

    fn complete_tail(&mut self, side: Side, id: &str) {
        let last_idx = self.pairings.len() - 1;
        let mut candidate = self.pairings[last_idx].clone();
        candidate.set(side, id.to_string());

        let duplicate = self.pairings[..last_idx]
            .iter()
            .any(|p| p.is_complete() && *p == candidate);

        if duplicate {
            tracing::debug!(
                left = candidate.left.as_deref(),
                right = candidate.right.as_deref(),
                "duplicate pairing suppressed"
            );
        } else {
            self.pairings[last_idx] = candidate;
        }
        self.highlight = SelectionHighlight::default();
    }

    /// Remove the complete pairing `left -> right`. Returns whether one was removed.
    pub fn remove_line(&mut self, left: &str, right: &str) -> bool {
        if self.disabled {
            return false;
        }
        match self.pairings.iter().position(|p| p.connects(left, right)) {
            Some(idx) => {
                self.pairings.remove(idx);
                true
            }
            None => {
                tracing::debug!(left, right, "no pairing to remove");
                false
            }
        }
    }

    /// Drop every pairing and the highlight.
    pub fn remove_all(&mut self) {
        self.pairings.clear();
        self.highlight = SelectionHighlight::default();
    }

    pub fn clear_highlight(&mut self) {
        self.highlight = SelectionHighlight::default();
    }

    /// Lock or unlock selection. Either way the highlight is cleared.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.clear_highlight();
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}
