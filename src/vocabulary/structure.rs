//! Internal structure types.

use super::Vocabulary;
use crate::rules::{self, Rule};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureType {
    Standard,
    EndoSteel,
    EndoSteelClan,
    EndoComposite,
    Reinforced,
    Composite,
    Industrial,
}

impl Vocabulary for StructureType {
    const ALL: &'static [Self] = &[
        Self::Standard,
        Self::EndoSteel,
        Self::EndoSteelClan,
        Self::EndoComposite,
        Self::Reinforced,
        Self::Composite,
        Self::Industrial,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::EndoSteel => "ENDO_STEEL",
            Self::EndoSteelClan => "ENDO_STEEL_CLAN",
            Self::EndoComposite => "ENDO_COMPOSITE",
            Self::Reinforced => "REINFORCED",
            Self::Composite => "COMPOSITE",
            Self::Industrial => "INDUSTRIAL",
        }
    }
}

canonical_token!(StructureType);

const ALIASES: &[(&str, StructureType)] = &[
    ("Standard", StructureType::Standard),
    ("IS Standard", StructureType::Standard),
    ("Standard Structure", StructureType::Standard),
    ("Endo Steel", StructureType::EndoSteel),
    ("IS Endo Steel", StructureType::EndoSteel),
    ("Endo-Steel", StructureType::EndoSteel),
    ("Clan Endo Steel", StructureType::EndoSteelClan),
    ("Clan Endo-Steel", StructureType::EndoSteelClan),
    ("Endo-Composite", StructureType::EndoComposite),
    ("Endo Composite", StructureType::EndoComposite),
    ("Reinforced", StructureType::Reinforced),
    ("Reinforced Structure", StructureType::Reinforced),
    ("Composite", StructureType::Composite),
    ("Composite Structure", StructureType::Composite),
    ("Industrial", StructureType::Industrial),
    ("Industrial Structure", StructureType::Industrial),
];

const FALLBACK: &[Rule<StructureType>] = &[
    Rule::all(&["ENDO", "COMPOSITE"], StructureType::EndoComposite),
    Rule::all(&["ENDO", "CLAN"], StructureType::EndoSteelClan),
    Rule::any(&["ENDO"], StructureType::EndoSteel),
    Rule::any(&["REINFORCED"], StructureType::Reinforced),
    Rule::any(&["COMPOSITE"], StructureType::Composite),
    Rule::any(&["INDUSTRIAL"], StructureType::Industrial),
];

static TABLE: LazyLock<HashMap<&'static str, StructureType>> = LazyLock::new(|| rules::table(ALIASES));

pub fn map_structure_type(raw: &str) -> StructureType {
    rules::resolve("structure", raw, &TABLE, FALLBACK, StructureType::Standard)
}
