//! Core types for the quiz application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single matchable item.
pub type ItemId = String;

/// Column an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other column.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item shown in one column of an extended-match question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub text: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One required pairing of the answer key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrectMatch {
    pub left: ItemId,
    pub right: ItemId,
}

impl CorrectMatch {
    pub fn new(left: impl Into<ItemId>, right: impl Into<ItemId>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Global quiz settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Present options in random order.
    pub shuffle_options: bool,
    /// Lock the question once an answer has been submitted.
    pub lock_on_submit: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            shuffle_options: true,
            lock_on_submit: true,
        }
    }
}

/// Per-module settings (all fields optional for overrides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSettings {
    pub module_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_options: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_on_submit: Option<bool>,
}

impl ModuleSettings {
    /// Create new module settings with only the id set.
    pub fn new(module_id: String) -> Self {
        Self {
            module_id,
            shuffle_options: None,
            lock_on_submit: None,
        }
    }
}

/// Effective settings (global merged with module overrides).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub shuffle_options: bool,
    pub lock_on_submit: bool,
}

impl Default for EffectiveSettings {
    fn default() -> Self {
        Self::merge(&QuizSettings::default(), None)
    }
}

impl EffectiveSettings {
    /// Merge global settings with optional module settings.
    pub fn merge(global: &QuizSettings, module: Option<&ModuleSettings>) -> Self {
        match module {
            Some(m) => Self {
                shuffle_options: m.shuffle_options.unwrap_or(global.shuffle_options),
                lock_on_submit: m.lock_on_submit.unwrap_or(global.lock_on_submit),
            },
            None => Self {
                shuffle_options: global.shuffle_options,
                lock_on_submit: global.lock_on_submit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn merge_without_module_uses_global() {
        let global = QuizSettings {
            shuffle_options: false,
            lock_on_submit: true,
        };
        let effective = EffectiveSettings::merge(&global, None);
        assert!(!effective.shuffle_options);
        assert!(effective.lock_on_submit);
    }

    #[test]
    fn merge_module_overrides_global() {
        let global = QuizSettings::default();
        let mut module = ModuleSettings::new("biology".to_string());
        module.lock_on_submit = Some(false);

        let effective = EffectiveSettings::merge(&global, Some(&module));
        assert!(effective.shuffle_options);
        assert!(!effective.lock_on_submit);
    }

    #[test]
    fn item_text_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id":"l0"}"#).unwrap();
        assert_eq!(item, Item::new("l0", ""));
    }
}
