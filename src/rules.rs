//! Exact-match tables and ordered substring fallbacks.
//!
//! Every category resolves a raw token the same way:
//! 1. Trim surrounding whitespace
//! 2. Look the trimmed token up in the category's alias table
//! 3. Uppercase it and evaluate the fallback rules in order
//! 4. Return the category default
//!
//! Rules are plain data so the priority order is visible at the definition
//! site: compound predicates (`Predicate::All`) must be listed before the
//! single-keyword rules they refine.

use std::collections::HashMap;

/// Substring test applied to the uppercased token.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// Matches when at least one needle occurs in the token
    Any(&'static [&'static str]),
    /// Matches when every needle occurs in the token
    All(&'static [&'static str]),
}

impl Predicate {
    pub fn matches(&self, upper: &str) -> bool {
        match self {
            Predicate::Any(needles) => needles.iter().any(|n| upper.contains(*n)),
            Predicate::All(needles) => needles.iter().all(|n| upper.contains(*n)),
        }
    }
}

/// One entry in a category's fallback list.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T> {
    pub predicate: Predicate,
    pub token: T,
}

impl<T> Rule<T> {
    /// Rule matching if the token contains any of `needles`.
    pub const fn any(needles: &'static [&'static str], token: T) -> Self {
        Self {
            predicate: Predicate::Any(needles),
            token,
        }
    }

    /// Rule matching only if the token contains all of `needles`.
    pub const fn all(needles: &'static [&'static str], token: T) -> Self {
        Self {
            predicate: Predicate::All(needles),
            token,
        }
    }
}

/// Build an alias table from a const pair slice.
pub fn table<T: Copy>(pairs: &[(&'static str, T)]) -> HashMap<&'static str, T> {
    pairs.iter().copied().collect()
}

/// Evaluate `rules` in order against `clean` (already trimmed).
///
/// Returns the token of the first matching rule.
pub fn first_match<T: Copy>(clean: &str, rules: &[Rule<T>]) -> Option<T> {
    if rules.is_empty() {
        return None;
    }
    let upper = clean.to_uppercase();
    rules
        .iter()
        .find(|rule| rule.predicate.matches(&upper))
        .map(|rule| rule.token)
}

/// Resolve a raw token through the full lookup chain.
///
/// `category` is only used for diagnostics.
pub fn resolve<T: Copy>(
    category: &str,
    raw: &str,
    aliases: &HashMap<&'static str, T>,
    rules: &[Rule<T>],
    default: T,
) -> T {
    let clean = raw.trim();
    if let Some(&token) = aliases.get(clean) {
        return token;
    }
    resolve_unlisted(category, clean, rules, default)
}

/// Steps 3 and 4 of the chain, for callers with their own exact lookups.
pub fn resolve_unlisted<T: Copy>(category: &str, clean: &str, rules: &[Rule<T>], default: T) -> T {
    if let Some(token) = first_match(clean, rules) {
        log::debug!(
            target: "mtf_normalize::fallback",
            "{}: '{}' resolved by keyword rule",
            category,
            clean
        );
        return token;
    }
    log::debug!(
        target: "mtf_normalize::fallback",
        "{}: '{}' not recognized, using default",
        category,
        clean
    );
    default
}
