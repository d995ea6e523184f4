//! Rules level (tournament legality tier).

use super::Vocabulary;
use crate::rules;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RulesLevel {
    Introductory,
    Standard,
    Advanced,
    Experimental,
    Unofficial,
}

impl RulesLevel {
    /// Folder slug used when sorting converted units on disk.
    ///
    /// `UNOFFICIAL` units are filed with `standard`.
    pub fn folder_name(self) -> &'static str {
        match self {
            Self::Introductory => "introductory",
            Self::Standard | Self::Unofficial => "standard",
            Self::Advanced => "advanced",
            Self::Experimental => "experimental",
        }
    }
}

impl Vocabulary for RulesLevel {
    const ALL: &'static [Self] = &[
        Self::Introductory,
        Self::Standard,
        Self::Advanced,
        Self::Experimental,
        Self::Unofficial,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Introductory => "INTRODUCTORY",
            Self::Standard => "STANDARD",
            Self::Advanced => "ADVANCED",
            Self::Experimental => "EXPERIMENTAL",
            Self::Unofficial => "UNOFFICIAL",
        }
    }
}

canonical_token!(RulesLevel);

const ALIASES: &[(&str, RulesLevel)] = &[
    ("0", RulesLevel::Introductory),
    ("1", RulesLevel::Standard),
    ("2", RulesLevel::Advanced),
    ("3", RulesLevel::Experimental),
    ("4", RulesLevel::Unofficial),
    ("Introductory", RulesLevel::Introductory),
    ("Standard", RulesLevel::Standard),
    ("Advanced", RulesLevel::Advanced),
    ("Experimental", RulesLevel::Experimental),
    ("Unofficial", RulesLevel::Unofficial),
    // Type tag variations
    ("IS Level 1", RulesLevel::Introductory),
    ("IS Level 2", RulesLevel::Standard),
    ("IS Level 3", RulesLevel::Advanced),
    ("IS Level 4", RulesLevel::Experimental),
    ("Clan Level 2", RulesLevel::Standard),
    ("Clan Level 3", RulesLevel::Advanced),
];

static TABLE: LazyLock<HashMap<&'static str, RulesLevel>> = LazyLock::new(|| rules::table(ALIASES));

/// Map an MTF/BLK rules level.
///
/// Unlisted strings are classified by their first digit, so
/// `Level 3 (custom)` reads as `EXPERIMENTAL`.
pub fn map_rules_level(raw: &str) -> RulesLevel {
    let clean = raw.trim();
    if let Some(&level) = TABLE.get(clean) {
        return level;
    }
    if let Some(digit) = clean.chars().find(char::is_ascii_digit) {
        let mut buf = [0u8; 4];
        return TABLE
            .get(&*digit.encode_utf8(&mut buf))
            .copied()
            .unwrap_or(RulesLevel::Standard);
    }
    rules::resolve_unlisted("rules-level", clean, &[], RulesLevel::Standard)
}

/// Folder slug for a canonical rules-level string; unknown strings get `standard`.
pub fn get_rules_level_folder_name(rules_level: &str) -> &'static str {
    RulesLevel::from_canonical(rules_level)
        .map(RulesLevel::folder_name)
        .unwrap_or("standard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_levels() {
        assert_eq!(map_rules_level("0"), RulesLevel::Introductory);
        assert_eq!(map_rules_level("4"), RulesLevel::Unofficial);
        assert_eq!(map_rules_level("Advanced"), RulesLevel::Advanced);
        assert_eq!(map_rules_level(" IS Level 4 "), RulesLevel::Experimental);
        assert_eq!(map_rules_level("Clan Level 3"), RulesLevel::Advanced);
    }

    #[test]
    fn test_first_digit_extraction() {
        assert_eq!(map_rules_level("Level 3 (custom)"), RulesLevel::Experimental);
        assert_eq!(map_rules_level("Tier 2/4"), RulesLevel::Advanced);
        // Digit present but not a known level
        assert_eq!(map_rules_level("Level 9"), RulesLevel::Standard);
    }

    #[test]
    fn test_no_digit_defaults_to_standard() {
        assert_eq!(map_rules_level(""), RulesLevel::Standard);
        assert_eq!(map_rules_level("advanced"), RulesLevel::Standard);
    }

    #[test]
    fn test_folder_names() {
        assert_eq!(get_rules_level_folder_name("INTRODUCTORY"), "introductory");
        assert_eq!(get_rules_level_folder_name("EXPERIMENTAL"), "experimental");
        assert_eq!(get_rules_level_folder_name("UNOFFICIAL"), "standard");
        assert_eq!(get_rules_level_folder_name("Advanced"), "standard");
        assert_eq!(get_rules_level_folder_name(""), "standard");
    }
}
