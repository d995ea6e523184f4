//! Cockpit types. Exact aliases only, no keyword fallback.

use super::Vocabulary;
use crate::rules;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CockpitType {
    Standard,
    Small,
    CommandConsole,
    TorsoMounted,
    Primitive,
    Industrial,
    PrimitiveIndustrial,
    SuperheavyIndustrial,
    TripodIndustrial,
    SuperheavyTripodIndustrial,
    Superheavy,
    SuperheavyTripod,
    Interface,
    QuadVee,
}

impl Vocabulary for CockpitType {
    const ALL: &'static [Self] = &[
        Self::Standard,
        Self::Small,
        Self::CommandConsole,
        Self::TorsoMounted,
        Self::Primitive,
        Self::Industrial,
        Self::PrimitiveIndustrial,
        Self::SuperheavyIndustrial,
        Self::TripodIndustrial,
        Self::SuperheavyTripodIndustrial,
        Self::Superheavy,
        Self::SuperheavyTripod,
        Self::Interface,
        Self::QuadVee,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Small => "SMALL",
            Self::CommandConsole => "COMMAND_CONSOLE",
            Self::TorsoMounted => "TORSO_MOUNTED",
            Self::Primitive => "PRIMITIVE",
            Self::Industrial => "INDUSTRIAL",
            Self::PrimitiveIndustrial => "PRIMITIVE_INDUSTRIAL",
            Self::SuperheavyIndustrial => "SUPERHEAVY_INDUSTRIAL",
            Self::TripodIndustrial => "TRIPOD_INDUSTRIAL",
            Self::SuperheavyTripodIndustrial => "SUPERHEAVY_TRIPOD_INDUSTRIAL",
            Self::Superheavy => "SUPERHEAVY",
            Self::SuperheavyTripod => "SUPERHEAVY_TRIPOD",
            Self::Interface => "INTERFACE",
            Self::QuadVee => "QUADVEE",
        }
    }
}

canonical_token!(CockpitType);

const ALIASES: &[(&str, CockpitType)] = &[
    ("Standard Cockpit", CockpitType::Standard),
    ("Standard", CockpitType::Standard),
    ("Small Cockpit", CockpitType::Small),
    ("Small", CockpitType::Small),
    ("Command Console", CockpitType::CommandConsole),
    ("Torso-Mounted Cockpit", CockpitType::TorsoMounted),
    ("Torso Cockpit", CockpitType::TorsoMounted),
    ("Primitive Cockpit", CockpitType::Primitive),
    ("Primitive", CockpitType::Primitive),
    ("Industrial Cockpit", CockpitType::Industrial),
    ("Industrial", CockpitType::Industrial),
    ("Primitive Industrial Cockpit", CockpitType::PrimitiveIndustrial),
    ("Primitive Industrial", CockpitType::PrimitiveIndustrial),
    ("Superheavy Industrial Cockpit", CockpitType::SuperheavyIndustrial),
    ("Tripod Industrial Cockpit", CockpitType::TripodIndustrial),
    (
        "Superheavy Tripod Industrial Cockpit",
        CockpitType::SuperheavyTripodIndustrial,
    ),
    ("Superheavy Cockpit", CockpitType::Superheavy),
    ("Superheavy Tripod Cockpit", CockpitType::SuperheavyTripod),
    ("Interface Cockpit", CockpitType::Interface),
    ("QuadVee Cockpit", CockpitType::QuadVee),
];

static TABLE: LazyLock<HashMap<&'static str, CockpitType>> = LazyLock::new(|| rules::table(ALIASES));

pub fn map_cockpit_type(raw: &str) -> CockpitType {
    rules::resolve("cockpit", raw, &TABLE, &[], CockpitType::Standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_aliases() {
        assert_eq!(map_cockpit_type("Torso Cockpit"), CockpitType::TorsoMounted);
        assert_eq!(
            map_cockpit_type(" Superheavy Tripod Industrial Cockpit "),
            CockpitType::SuperheavyTripodIndustrial
        );
        assert_eq!(map_cockpit_type("QuadVee Cockpit"), CockpitType::QuadVee);
    }

    #[test]
    fn test_no_keyword_fallback() {
        // Close but not listed: no heuristics for cockpits
        assert_eq!(map_cockpit_type("small cockpit"), CockpitType::Standard);
        assert_eq!(map_cockpit_type("Torso-Mounted"), CockpitType::Standard);
        assert_eq!(map_cockpit_type(""), CockpitType::Standard);
    }

    #[test]
    fn test_quadvee_canonical_string() {
        assert_eq!(CockpitType::QuadVee.as_str(), "QUADVEE");
    }
}
