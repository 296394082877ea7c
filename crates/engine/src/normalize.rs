//! Skill normalization: raw user text in, canonical token set out.
//!
//! All skill comparison downstream happens on normalized tokens, so this is
//! the only place that validates or rewrites skill text.

use serde::Serialize;

/// Normalizes one raw skill string: trims, collapses internal whitespace,
/// lower-cases. Returns `None` for strings that are empty after trimming.
pub fn normalize_token(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_lowercase())
    }
}

/// A deduplicated set of normalized skill tokens, preserving first-seen order.
///
/// Created per request from raw input; never mutated afterwards. Empty input
/// produces an empty set, which downstream components treat as "no matches",
/// not as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillSet {
    tokens: Vec<String>,
}

impl SkillSet {
    /// Parses comma- or newline-separated raw input into a skill set.
    pub fn parse(raw: &str) -> Self {
        Self::from_tokens(raw.split([',', '\n']))
    }

    /// Builds a skill set from already-split raw tokens.
    pub fn from_tokens<'a, I>(raw_tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tokens: Vec<String> = Vec::new();
        for raw in raw_tokens {
            if let Some(token) = normalize_token(raw) {
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
        }
        Self { tokens }
    }

    /// Normalized tokens in first-seen order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Exact-equality membership test. `token` must already be normalized.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
