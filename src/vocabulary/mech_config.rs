//! Mech chassis configuration. Canonical tokens are mixed-case (`QuadVee`).

use super::Vocabulary;
use crate::rules;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MechConfig {
    Biped,
    Quad,
    Tripod,
    Lam,
    QuadVee,
}

impl Vocabulary for MechConfig {
    const ALL: &'static [Self] = &[Self::Biped, Self::Quad, Self::Tripod, Self::Lam, Self::QuadVee];

    fn as_str(self) -> &'static str {
        match self {
            Self::Biped => "Biped",
            Self::Quad => "Quad",
            Self::Tripod => "Tripod",
            Self::Lam => "LAM",
            Self::QuadVee => "QuadVee",
        }
    }
}

canonical_token!(MechConfig);

const ALIASES: &[(&str, MechConfig)] = &[
    ("Biped", MechConfig::Biped),
    ("Quad", MechConfig::Quad),
    ("Tripod", MechConfig::Tripod),
    ("LAM", MechConfig::Lam),
    ("QuadVee", MechConfig::QuadVee),
    ("Biped Omnimech", MechConfig::Biped),
    ("Quad Omnimech", MechConfig::Quad),
];

static TABLE: LazyLock<HashMap<&'static str, MechConfig>> = LazyLock::new(|| rules::table(ALIASES));

pub fn map_mech_config(raw: &str) -> MechConfig {
    rules::resolve("mech-config", raw, &TABLE, &[], MechConfig::Biped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configs() {
        assert_eq!(map_mech_config("Quad Omnimech"), MechConfig::Quad);
        assert_eq!(map_mech_config("LAM"), MechConfig::Lam);
        assert_eq!(map_mech_config(" QuadVee "), MechConfig::QuadVee);
    }

    #[test]
    fn test_unknown_defaults_to_biped() {
        assert_eq!(map_mech_config("quad"), MechConfig::Biped);
        assert_eq!(map_mech_config("Tripod Omnimech"), MechConfig::Biped);
    }

    #[test]
    fn test_canonical_output_maps_to_itself() {
        for &config in MechConfig::ALL {
            assert_eq!(map_mech_config(config.as_str()), config);
        }
    }
}
