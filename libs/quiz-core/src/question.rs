//! Stored extended-match question definitions.
//!
//! # Format
//! ```json
//! {
//!   "id": "q1",
//!   "prompt": "Match each organelle to its function",
//!   "leftItems": [{ "id": "l0", "text": "Mitochondria" }],
//!   "rightItems": [{ "id": "r0", "text": "Energy production" }],
//!   "correctMatches": [{ "left": "l0", "right": "r0" }]
//! }
//! ```
//!
//! Item lists and the answer key may be missing or `null`; they load as empty.

use crate::error::{QuestionError, Result};
use crate::types::{CorrectMatch, Item, Side};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Definition of one extended-match question as kept by module storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedMatchQuestion {
    pub id: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub left_items: Vec<Item>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub right_items: Vec<Item>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub correct_matches: Vec<CorrectMatch>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a stored question from its JSON form.
pub fn parse_question(json: &str) -> Result<ExtendedMatchQuestion> {
    serde_json::from_str(json).map_err(QuestionError::from)
}

impl ExtendedMatchQuestion {
    /// Whether `other` has the same items and answer key.
    pub fn same_options(&self, other: &Self) -> bool {
        self.left_items == other.left_items
            && self.right_items == other.right_items
            && self.correct_matches == other.correct_matches
    }

    /// Answer-key entries that reference an id missing from its column.
    pub fn dangling_matches(&self) -> Vec<&CorrectMatch> {
        let left = ids(&self.left_items);
        let right = ids(&self.right_items);
        self.correct_matches
            .iter()
            .filter(|m| !left.contains(m.left.as_str()) || !right.contains(m.right.as_str()))
            .collect()
    }

    /// Check the definition is consistent enough to be saved by the editor.
    pub fn validate(&self) -> Result<()> {
        check_unique(&self.left_items, Side::Left)?;
        check_unique(&self.right_items, Side::Right)?;

        let left = ids(&self.left_items);
        let right = ids(&self.right_items);
        for m in &self.correct_matches {
            let side = if !left.contains(m.left.as_str()) {
                Side::Left
            } else if !right.contains(m.right.as_str()) {
                Side::Right
            } else {
                continue;
            };
            return Err(QuestionError::UnknownMatchItem {
                left: m.left.clone(),
                right: m.right.clone(),
                side,
            });
        }
        Ok(())
    }
}

fn ids(items: &[Item]) -> HashSet<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

fn check_unique(items: &[Item], side: Side) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(QuestionError::DuplicateItemId {
                side,
                id: item.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "id": "q1",
        "prompt": "Match",
        "leftItems": [{"id": "l0", "text": "A"}, {"id": "l1", "text": "B"}],
        "rightItems": [{"id": "r0", "text": "1"}],
        "correctMatches": [{"left": "l0", "right": "r0"}, {"left": "l1", "right": "r0"}]
    }"#;

    #[test]
    fn parse_full_question() {
        let question = parse_question(FULL).unwrap();
        assert_eq!(question.id, "q1");
        assert_eq!(question.left_items.len(), 2);
        assert_eq!(question.right_items[0], Item::new("r0", "1"));
        assert_eq!(question.correct_matches[1], CorrectMatch::new("l1", "r0"));
        assert!(question.validate().is_ok());
    }

    #[test]
    fn missing_and_null_lists_load_empty() {
        let question = parse_question(r#"{"id": "q2", "leftItems": null}"#).unwrap();
        assert!(question.left_items.is_empty());
        assert!(question.right_items.is_empty());
        assert!(question.correct_matches.is_empty());
    }

    #[test]
    fn reject_invalid_json() {
        let result = parse_question("{not json");
        assert!(matches!(result, Err(QuestionError::InvalidJson(_))));
    }

    #[test]
    fn reject_duplicate_item_ids() {
        let question = ExtendedMatchQuestion {
            id: "q".to_string(),
            right_items: vec![Item::new("r0", "x"), Item::new("r0", "y")],
            ..Default::default()
        };
        assert!(matches!(
            question.validate(),
            Err(QuestionError::DuplicateItemId { side: Side::Right, .. })
        ));
    }

    #[test]
    fn dangling_match_is_reported() {
        let question = ExtendedMatchQuestion {
            id: "q".to_string(),
            left_items: vec![Item::new("l0", "a")],
            right_items: vec![Item::new("r0", "b")],
            correct_matches: vec![CorrectMatch::new("l0", "r0"), CorrectMatch::new("l0", "r9")],
            ..Default::default()
        };
        assert_eq!(question.dangling_matches(), vec![&CorrectMatch::new("l0", "r9")]);
        assert!(matches!(
            question.validate(),
            Err(QuestionError::UnknownMatchItem { side: Side::Right, .. })
        ));
    }

    #[test]
    fn same_options_ignores_prompt() {
        let a = parse_question(FULL).unwrap();
        let mut b = a.clone();
        b.prompt = "Reworded".to_string();
        assert!(a.same_options(&b));
        b.right_items.clear();
        assert!(!a.same_options(&b));
    }
}
