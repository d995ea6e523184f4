//! Category-dispatched normalization with user alias overrides.
//!
//! The `map_*` functions cover the built-in tables. A [`Normalizer`] adds a
//! layer of exact-match overrides on top, loaded from config, so new legacy
//! spellings can be taught without a rebuild. Overrides are validated when
//! the normalizer is built: every target must be a canonical token of its
//! category, which keeps the closed-set guarantee intact.

use crate::config::NormalizerSettings;
use crate::error::{Error, Result};
use crate::vocabulary::Category;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    overrides: HashMap<Category, HashMap<String, &'static str>>,
}

impl Normalizer {
    /// Normalizer with built-in tables only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer with overrides from `settings`.
    ///
    /// Fails on unknown category names and on targets outside the
    /// category's canonical tokens.
    pub fn with_settings(settings: &NormalizerSettings) -> Result<Self> {
        let mut overrides: HashMap<Category, HashMap<String, &'static str>> = HashMap::new();
        for (category_name, aliases) in &settings.aliases {
            let category: Category = category_name.parse()?;
            let tokens = category.tokens();
            let entry = overrides.entry(category).or_default();
            for (alias, token) in aliases {
                let canonical = tokens
                    .iter()
                    .copied()
                    .find(|candidate| *candidate == token.trim())
                    .ok_or_else(|| Error::invalid_override(category.as_str(), alias, token))?;
                entry.insert(alias.trim().to_string(), canonical);
            }
        }
        log::debug!(
            target: "mtf_normalize::normalizer",
            "Loaded {} alias overrides",
            overrides.values().map(HashMap::len).sum::<usize>()
        );
        Ok(Self { overrides })
    }

    /// Number of override entries across all categories.
    pub fn override_count(&self) -> usize {
        self.overrides.values().map(HashMap::len).sum()
    }

    /// Normalize `raw` for `category`, consulting overrides first.
    pub fn normalize(&self, category: Category, raw: &str) -> String {
        let clean = raw.trim();
        if let Some(token) = self
            .overrides
            .get(&category)
            .and_then(|aliases| aliases.get(clean))
        {
            return (*token).to_string();
        }
        category.normalize(clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(entries: &[(&str, &str, &str)]) -> NormalizerSettings {
        let mut settings = NormalizerSettings::default();
        for (category, alias, token) in entries {
            settings
                .aliases
                .entry(category.to_string())
                .or_default()
                .insert(alias.to_string(), token.to_string());
        }
        settings
    }

    #[test]
    fn test_builtin_only() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.override_count(), 0);
        assert_eq!(normalizer.normalize(Category::Engine, "XL Engine"), "XL");
        assert_eq!(normalizer.normalize(Category::Location, "Turret"), "TURRET");
    }

    #[test]
    fn test_override_wins_over_builtin() {
        let normalizer =
            Normalizer::with_settings(&settings(&[("engine", "XL Engine", "CLAN_XL")])).unwrap();
        assert_eq!(normalizer.normalize(Category::Engine, " XL Engine "), "CLAN_XL");
        // Other categories are untouched
        assert_eq!(normalizer.normalize(Category::Gyro, "XL Gyro"), "XL");
    }

    #[test]
    fn test_override_can_recognize_new_location() {
        let normalizer =
            Normalizer::with_settings(&settings(&[("location", "Turret", "CENTER_TORSO")]))
                .unwrap();
        assert_eq!(normalizer.normalize(Category::Location, "Turret"), "CENTER_TORSO");
        assert_eq!(normalizer.normalize(Category::Location, "LA"), "LEFT_ARM");
    }

    #[test]
    fn test_override_target_must_be_canonical() {
        let err = Normalizer::with_settings(&settings(&[("armor", "Plate", "Plate Armor")]))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOverride { ref category, ref alias, ref token }
                if category == "armor" && alias == "Plate" && token == "Plate Armor"
        ));
    }

    #[test]
    fn test_override_category_must_exist() {
        let err = Normalizer::with_settings(&settings(&[("hull", "Plate", "STANDARD")]))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownCategory { ref name } if name == "hull"));
    }

    #[test]
    fn test_mixed_case_tokens_are_canonical_for_their_category() {
        let normalizer = Normalizer::with_settings(&settings(&[
            ("unit-type", "Mek", "BattleMech"),
            ("mech-config", "Four Legs", "Quad"),
        ]))
        .unwrap();
        assert_eq!(normalizer.override_count(), 2);
        assert_eq!(normalizer.normalize(Category::UnitType, "Mek"), "BattleMech");
        assert_eq!(normalizer.normalize(Category::MechConfig, "Four Legs"), "Quad");
    }
}
