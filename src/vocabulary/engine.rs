//! Engine types.

use super::Vocabulary;
use crate::rules::{self, Rule};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineType {
    Fusion,
    Xl,
    ClanXl,
    Light,
    Compact,
    Xxl,
    ClanXxl,
    Ice,
    FuelCell,
    Fission,
}

impl Vocabulary for EngineType {
    const ALL: &'static [Self] = &[
        Self::Fusion,
        Self::Xl,
        Self::ClanXl,
        Self::Light,
        Self::Compact,
        Self::Xxl,
        Self::ClanXxl,
        Self::Ice,
        Self::FuelCell,
        Self::Fission,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Fusion => "FUSION",
            Self::Xl => "XL",
            Self::ClanXl => "CLAN_XL",
            Self::Light => "LIGHT",
            Self::Compact => "COMPACT",
            Self::Xxl => "XXL",
            Self::ClanXxl => "CLAN_XXL",
            Self::Ice => "ICE",
            Self::FuelCell => "FUEL_CELL",
            Self::Fission => "FISSION",
        }
    }
}

canonical_token!(EngineType);

const ALIASES: &[(&str, EngineType)] = &[
    ("Fusion Engine", EngineType::Fusion),
    ("Fusion Engine(IS)", EngineType::Fusion),
    ("Fusion Engine (IS)", EngineType::Fusion),
    ("Fusion", EngineType::Fusion),
    ("Standard Fusion", EngineType::Fusion),
    ("XL Engine", EngineType::Xl),
    ("XL Engine(IS)", EngineType::Xl),
    ("XL Engine (IS)", EngineType::Xl),
    ("XL Fusion Engine", EngineType::Xl),
    ("Extra-Light Engine", EngineType::Xl),
    ("XL Engine(Clan)", EngineType::ClanXl),
    ("XL Engine (Clan)", EngineType::ClanXl),
    ("Clan XL Engine", EngineType::ClanXl),
    ("Light Engine", EngineType::Light),
    ("Light Engine(IS)", EngineType::Light),
    ("Light Fusion Engine", EngineType::Light),
    ("Compact Engine", EngineType::Compact),
    ("Compact Fusion Engine", EngineType::Compact),
    ("XXL Engine", EngineType::Xxl),
    ("XXL Engine(IS)", EngineType::Xxl),
    ("XXL Engine(Clan)", EngineType::ClanXxl),
    ("ICE Engine", EngineType::Ice),
    ("ICE", EngineType::Ice),
    ("Internal Combustion Engine", EngineType::Ice),
    ("Fuel Cell Engine", EngineType::FuelCell),
    ("Fuel Cell", EngineType::FuelCell),
    ("Fuel-Cell Engine", EngineType::FuelCell),
    ("Fission Engine", EngineType::Fission),
    ("Fission", EngineType::Fission),
    // BLK engine_type codes
    ("0", EngineType::Fusion),
    ("1", EngineType::Xl),
    ("2", EngineType::Light),
    ("3", EngineType::Compact),
    ("4", EngineType::ClanXl),
    ("5", EngineType::Xxl),
];

// XXL before XL: every XXL token also contains "XL".
const FALLBACK: &[Rule<EngineType>] = &[
    Rule::any(&["XXL"], EngineType::Xxl),
    Rule::all(&["XL", "CLAN"], EngineType::ClanXl),
    Rule::any(&["XL"], EngineType::Xl),
    Rule::any(&["LIGHT"], EngineType::Light),
    Rule::any(&["COMPACT"], EngineType::Compact),
    Rule::any(&["ICE", "COMBUSTION"], EngineType::Ice),
    Rule::any(&["FUEL", "CELL"], EngineType::FuelCell),
    Rule::any(&["FISSION"], EngineType::Fission),
];

static TABLE: LazyLock<HashMap<&'static str, EngineType>> = LazyLock::new(|| rules::table(ALIASES));

/// Map an MTF engine string such as `XL Engine(Clan)` or a BLK engine code.
pub fn map_engine_type(raw: &str) -> EngineType {
    rules::resolve("engine", raw, &TABLE, FALLBACK, EngineType::Fusion)
}
