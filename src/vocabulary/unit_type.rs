//! Unit types, as named by the target data model.

use super::Vocabulary;
use crate::rules;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    BattleMech,
    OmniMech,
    IndustrialMech,
    ProtoMech,
    Vehicle,
    Vtol,
    Aerospace,
    ConventionalFighter,
    SmallCraft,
    DropShip,
    JumpShip,
    WarShip,
    SpaceStation,
    Infantry,
    BattleArmor,
    SupportVehicle,
}

impl Vocabulary for UnitType {
    const ALL: &'static [Self] = &[
        Self::BattleMech,
        Self::OmniMech,
        Self::IndustrialMech,
        Self::ProtoMech,
        Self::Vehicle,
        Self::Vtol,
        Self::Aerospace,
        Self::ConventionalFighter,
        Self::SmallCraft,
        Self::DropShip,
        Self::JumpShip,
        Self::WarShip,
        Self::SpaceStation,
        Self::Infantry,
        Self::BattleArmor,
        Self::SupportVehicle,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::BattleMech => "BattleMech",
            Self::OmniMech => "OmniMech",
            Self::IndustrialMech => "IndustrialMech",
            Self::ProtoMech => "ProtoMech",
            Self::Vehicle => "Vehicle",
            Self::Vtol => "VTOL",
            Self::Aerospace => "Aerospace",
            Self::ConventionalFighter => "Conventional Fighter",
            Self::SmallCraft => "Small Craft",
            Self::DropShip => "DropShip",
            Self::JumpShip => "JumpShip",
            Self::WarShip => "WarShip",
            Self::SpaceStation => "Space Station",
            Self::Infantry => "Infantry",
            Self::BattleArmor => "Battle Armor",
            Self::SupportVehicle => "Support Vehicle",
        }
    }
}

canonical_token!(UnitType);

const ALIASES: &[(&str, UnitType)] = &[
    ("BattleMech", UnitType::BattleMech),
    ("Mech", UnitType::BattleMech),
    ("Biped", UnitType::BattleMech),
    ("Quad", UnitType::BattleMech),
    ("OmniMech", UnitType::OmniMech),
    ("IndustrialMech", UnitType::IndustrialMech),
    ("ProtoMech", UnitType::ProtoMech),
    ("Tank", UnitType::Vehicle),
    ("Vehicle", UnitType::Vehicle),
    ("VTOL", UnitType::Vtol),
    ("Aerospace", UnitType::Aerospace),
    ("AeroSpaceFighter", UnitType::Aerospace),
    ("Conventional Fighter", UnitType::ConventionalFighter),
    ("ConvFighter", UnitType::ConventionalFighter),
    ("Small Craft", UnitType::SmallCraft),
    ("SmallCraft", UnitType::SmallCraft),
    ("DropShip", UnitType::DropShip),
    ("Dropship", UnitType::DropShip),
    ("JumpShip", UnitType::JumpShip),
    ("Jumpship", UnitType::JumpShip),
    ("WarShip", UnitType::WarShip),
    ("Warship", UnitType::WarShip),
    ("Space Station", UnitType::SpaceStation),
    ("SpaceStation", UnitType::SpaceStation),
    ("Infantry", UnitType::Infantry),
    ("BattleArmor", UnitType::BattleArmor),
    ("Battle Armor", UnitType::BattleArmor),
    ("Support Vehicle", UnitType::SupportVehicle),
    ("SupportVehicle", UnitType::SupportVehicle),
];

static TABLE: LazyLock<HashMap<&'static str, UnitType>> = LazyLock::new(|| rules::table(ALIASES));

pub fn map_unit_type(raw: &str) -> UnitType {
    rules::resolve("unit-type", raw, &TABLE, &[], UnitType::BattleMech)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelling_variants() {
        assert_eq!(map_unit_type("Tank"), UnitType::Vehicle);
        assert_eq!(map_unit_type("ConvFighter"), UnitType::ConventionalFighter);
        assert_eq!(map_unit_type("Dropship"), UnitType::DropShip);
        assert_eq!(map_unit_type("SpaceStation"), UnitType::SpaceStation);
        assert_eq!(map_unit_type("BattleArmor"), UnitType::BattleArmor);
    }

    #[test]
    fn test_unknown_defaults_to_battlemech() {
        assert_eq!(map_unit_type("Gun Emplacement"), UnitType::BattleMech);
        assert_eq!(map_unit_type(""), UnitType::BattleMech);
    }

    #[test]
    fn test_canonical_output_maps_to_itself() {
        for &unit_type in UnitType::ALL {
            assert_eq!(map_unit_type(unit_type.as_str()), unit_type);
        }
    }
}
