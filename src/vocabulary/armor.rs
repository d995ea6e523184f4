//! Armor types.
//!
//! The fallback order matters more here than anywhere else: several armor
//! names are refinements of each other (`Heavy Ferro-Fibrous` vs
//! `Ferro-Fibrous`, `Heavy Industrial` vs `Industrial`), and the refined
//! compound rule has to run first.

use super::Vocabulary;
use crate::rules::{self, Rule};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmorType {
    Standard,
    FerroFibrous,
    FerroFibrousClan,
    LightFerroFibrous,
    HeavyFerroFibrous,
    Stealth,
    Reactive,
    Reflective,
    Hardened,
    Primitive,
    Industrial,
    Commercial,
    HeavyIndustrial,
    ImpactResistant,
}

impl Vocabulary for ArmorType {
    const ALL: &'static [Self] = &[
        Self::Standard,
        Self::FerroFibrous,
        Self::FerroFibrousClan,
        Self::LightFerroFibrous,
        Self::HeavyFerroFibrous,
        Self::Stealth,
        Self::Reactive,
        Self::Reflective,
        Self::Hardened,
        Self::Primitive,
        Self::Industrial,
        Self::Commercial,
        Self::HeavyIndustrial,
        Self::ImpactResistant,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::FerroFibrous => "FERRO_FIBROUS",
            Self::FerroFibrousClan => "FERRO_FIBROUS_CLAN",
            Self::LightFerroFibrous => "LIGHT_FERRO_FIBROUS",
            Self::HeavyFerroFibrous => "HEAVY_FERRO_FIBROUS",
            Self::Stealth => "STEALTH",
            Self::Reactive => "REACTIVE",
            Self::Reflective => "REFLECTIVE",
            Self::Hardened => "HARDENED",
            Self::Primitive => "PRIMITIVE",
            Self::Industrial => "INDUSTRIAL",
            Self::Commercial => "COMMERCIAL",
            Self::HeavyIndustrial => "HEAVY_INDUSTRIAL",
            Self::ImpactResistant => "IMPACT_RESISTANT",
        }
    }
}

canonical_token!(ArmorType);

const ALIASES: &[(&str, ArmorType)] = &[
    ("Standard", ArmorType::Standard),
    ("Standard Armor", ArmorType::Standard),
    ("Standard(Inner Sphere)", ArmorType::Standard),
    ("Ferro-Fibrous", ArmorType::FerroFibrous),
    ("Ferro-Fibrous Armor", ArmorType::FerroFibrous),
    ("Ferro-Fibrous(Inner Sphere)", ArmorType::FerroFibrous),
    ("IS Ferro-Fibrous", ArmorType::FerroFibrous),
    ("Clan Ferro-Fibrous", ArmorType::FerroFibrousClan),
    ("Ferro-Fibrous(Clan)", ArmorType::FerroFibrousClan),
    ("Light Ferro-Fibrous", ArmorType::LightFerroFibrous),
    ("Light Ferro-Fibrous Armor", ArmorType::LightFerroFibrous),
    ("Heavy Ferro-Fibrous", ArmorType::HeavyFerroFibrous),
    ("Heavy Ferro-Fibrous Armor", ArmorType::HeavyFerroFibrous),
    ("Stealth Armor", ArmorType::Stealth),
    ("Stealth", ArmorType::Stealth),
    ("Reactive Armor", ArmorType::Reactive),
    ("Reactive", ArmorType::Reactive),
    ("Reflective Armor", ArmorType::Reflective),
    ("Reflective", ArmorType::Reflective),
    ("Laser-Reflective", ArmorType::Reflective),
    ("Hardened Armor", ArmorType::Hardened),
    ("Hardened", ArmorType::Hardened),
    ("Primitive Armor", ArmorType::Primitive),
    ("Primitive", ArmorType::Primitive),
    ("Industrial Armor", ArmorType::Industrial),
    ("Industrial", ArmorType::Industrial),
    ("Commercial", ArmorType::Commercial),
    ("Commercial Armor", ArmorType::Commercial),
    ("Heavy Industrial", ArmorType::HeavyIndustrial),
    ("Heavy Industrial Armor", ArmorType::HeavyIndustrial),
    ("Impact-Resistant", ArmorType::ImpactResistant),
    ("Impact-Resistant Armor", ArmorType::ImpactResistant),
];

const FALLBACK: &[Rule<ArmorType>] = &[
    Rule::any(&["STEALTH"], ArmorType::Stealth),
    Rule::any(&["REACTIVE"], ArmorType::Reactive),
    Rule::any(&["REFLECTIVE", "LASER-REFLECT"], ArmorType::Reflective),
    Rule::any(&["HARDENED"], ArmorType::Hardened),
    Rule::all(&["HEAVY", "FERRO"], ArmorType::HeavyFerroFibrous),
    Rule::all(&["LIGHT", "FERRO"], ArmorType::LightFerroFibrous),
    Rule::all(&["FERRO", "CLAN"], ArmorType::FerroFibrousClan),
    Rule::any(&["FERRO"], ArmorType::FerroFibrous),
    Rule::any(&["PRIMITIVE"], ArmorType::Primitive),
    Rule::any(&["COMMERCIAL"], ArmorType::Commercial),
    Rule::all(&["IMPACT", "RESIST"], ArmorType::ImpactResistant),
    Rule::all(&["HEAVY", "INDUSTRIAL"], ArmorType::HeavyIndustrial),
    Rule::any(&["INDUSTRIAL"], ArmorType::Industrial),
];

static TABLE: LazyLock<HashMap<&'static str, ArmorType>> = LazyLock::new(|| rules::table(ALIASES));

pub fn map_armor_type(raw: &str) -> ArmorType {
    rules::resolve("armor", raw, &TABLE, FALLBACK, ArmorType::Standard)
}
