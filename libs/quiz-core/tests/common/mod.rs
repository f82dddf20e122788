//! Shared fixtures for quiz-core integration tests.

#![allow(dead_code)]

use quiz_core::{CorrectMatch, EffectiveSettings, ExtendedMatchQuestion, Item, MatchSession};

/// Items `{prefix}0 .. {prefix}{n-1}`.
pub fn items(prefix: &str, n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(format!("{prefix}{i}"), format!("{prefix} item {i}")))
        .collect()
}

pub fn key(pairs: &[(&str, &str)]) -> Vec<CorrectMatch> {
    pairs.iter().map(|(l, r)| CorrectMatch::new(*l, *r)).collect()
}

pub fn question(
    id: &str,
    n_left: usize,
    n_right: usize,
    pairs: &[(&str, &str)],
) -> ExtendedMatchQuestion {
    ExtendedMatchQuestion {
        id: id.to_string(),
        prompt: format!("Question {id}"),
        left_items: items("l", n_left),
        right_items: items("r", n_right),
        correct_matches: key(pairs),
    }
}

/// Seeded session so item orderings are reproducible.
pub fn session(question: ExtendedMatchQuestion) -> MatchSession {
    MatchSession::with_seed(question, EffectiveSettings::default(), 2024)
}

/// Draw each `(left, right)` line by clicking left then right.
pub fn draw(session: &mut MatchSession, pairs: &[(&str, &str)]) {
    for (left, right) in pairs {
        session.select_left(left);
        session.select_right(right);
    }
}
