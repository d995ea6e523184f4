//! Canonical vocabularies for legacy unit-definition tokens.
//!
//! Each submodule owns one category: its closed enumeration, its alias table
//! and its ordered fallback rules. The `map_*` functions are total: any
//! input yields a value, unrecognized data degrades to the category default
//! instead of failing a batch conversion.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Implements `Display` and `Serialize` in terms of the canonical string.
macro_rules! canonical_token {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::vocabulary::Vocabulary::as_str(*self))
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::vocabulary::Vocabulary::as_str(*self))
            }
        }
    };
}

pub mod armor;
pub mod cockpit;
pub mod engine;
pub mod gyro;
pub mod heat_sink;
pub mod location;
pub mod mech_config;
pub mod rules_level;
pub mod structure;
pub mod tech_base;
pub mod unit_type;

pub use armor::{ArmorType, map_armor_type};
pub use cockpit::{CockpitType, map_cockpit_type};
pub use engine::{EngineType, map_engine_type};
pub use gyro::{GyroType, map_gyro_type};
pub use heat_sink::{HeatSinkType, map_heat_sink_type};
pub use location::{MechLocation, ResolvedLocation, map_mech_location};
pub use mech_config::{MechConfig, map_mech_config};
pub use rules_level::{RulesLevel, get_rules_level_folder_name, map_rules_level};
pub use structure::{StructureType, map_structure_type};
pub use tech_base::{TechBase, map_tech_base};
pub use unit_type::{UnitType, map_unit_type};

/// A closed set of canonical tokens.
pub trait Vocabulary: Copy + Eq + 'static {
    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// Canonical string form (e.g. `CLAN_XL`, `QuadVee`)
    fn as_str(self) -> &'static str;

    /// Parse an exact canonical string back into the member.
    fn from_canonical(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == token)
    }
}

fn tokens_of<V: Vocabulary>() -> Vec<&'static str> {
    V::ALL.iter().map(|member| member.as_str()).collect()
}

/// Token category, one per field of the legacy formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    TechBase,
    RulesLevel,
    Engine,
    Gyro,
    Cockpit,
    Structure,
    Armor,
    HeatSink,
    Location,
    MechConfig,
    UnitType,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::TechBase,
        Category::RulesLevel,
        Category::Engine,
        Category::Gyro,
        Category::Cockpit,
        Category::Structure,
        Category::Armor,
        Category::HeatSink,
        Category::Location,
        Category::MechConfig,
        Category::UnitType,
    ];

    /// Stable kebab-case name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::TechBase => "tech-base",
            Category::RulesLevel => "rules-level",
            Category::Engine => "engine",
            Category::Gyro => "gyro",
            Category::Cockpit => "cockpit",
            Category::Structure => "structure",
            Category::Armor => "armor",
            Category::HeatSink => "heat-sink",
            Category::Location => "location",
            Category::MechConfig => "mech-config",
            Category::UnitType => "unit-type",
        }
    }

    /// Canonical tokens of this category.
    pub fn tokens(self) -> Vec<&'static str> {
        match self {
            Category::TechBase => tokens_of::<TechBase>(),
            Category::RulesLevel => tokens_of::<RulesLevel>(),
            Category::Engine => tokens_of::<EngineType>(),
            Category::Gyro => tokens_of::<GyroType>(),
            Category::Cockpit => tokens_of::<CockpitType>(),
            Category::Structure => tokens_of::<StructureType>(),
            Category::Armor => tokens_of::<ArmorType>(),
            Category::HeatSink => tokens_of::<HeatSinkType>(),
            Category::Location => tokens_of::<MechLocation>(),
            Category::MechConfig => tokens_of::<MechConfig>(),
            Category::UnitType => tokens_of::<UnitType>(),
        }
    }

    /// Whether `token` is a member of this category's closed set.
    pub fn is_canonical(self, token: &str) -> bool {
        self.tokens().contains(&token)
    }

    /// Run the built-in mapping for this category.
    pub fn normalize(self, raw: &str) -> String {
        match self {
            Category::TechBase => map_tech_base(raw).as_str().to_string(),
            Category::RulesLevel => map_rules_level(raw).as_str().to_string(),
            Category::Engine => map_engine_type(raw).as_str().to_string(),
            Category::Gyro => map_gyro_type(raw).as_str().to_string(),
            Category::Cockpit => map_cockpit_type(raw).as_str().to_string(),
            Category::Structure => map_structure_type(raw).as_str().to_string(),
            Category::Armor => map_armor_type(raw).as_str().to_string(),
            Category::HeatSink => map_heat_sink_type(raw).as_str().to_string(),
            Category::Location => map_mech_location(raw).as_str().to_string(),
            Category::MechConfig => map_mech_config(raw).as_str().to_string(),
            Category::UnitType => map_unit_type(raw).as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| Error::unknown_category(s))
    }
}
