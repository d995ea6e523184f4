//! Gyro types.

use super::Vocabulary;
use crate::rules::{self, Rule};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GyroType {
    Standard,
    Xl,
    Compact,
    HeavyDuty,
    Superheavy,
    None,
}

impl Vocabulary for GyroType {
    const ALL: &'static [Self] = &[
        Self::Standard,
        Self::Xl,
        Self::Compact,
        Self::HeavyDuty,
        Self::Superheavy,
        Self::None,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Xl => "XL",
            Self::Compact => "COMPACT",
            Self::HeavyDuty => "HEAVY_DUTY",
            Self::Superheavy => "SUPERHEAVY",
            Self::None => "NONE",
        }
    }
}

canonical_token!(GyroType);

const ALIASES: &[(&str, GyroType)] = &[
    ("Standard Gyro", GyroType::Standard),
    ("Standard", GyroType::Standard),
    ("XL Gyro", GyroType::Xl),
    ("Extra-Light Gyro", GyroType::Xl),
    ("Compact Gyro", GyroType::Compact),
    ("Heavy Duty Gyro", GyroType::HeavyDuty),
    ("Heavy-Duty Gyro", GyroType::HeavyDuty),
    ("Superheavy Gyro", GyroType::Superheavy),
    ("Super Heavy Gyro", GyroType::Superheavy),
    ("None", GyroType::None),
    ("0", GyroType::Standard),
    ("1", GyroType::Xl),
    ("2", GyroType::Compact),
    ("3", GyroType::HeavyDuty),
    ("4", GyroType::Superheavy),
];

// Superheavy must be tested before the plain HEAVY keyword.
const FALLBACK: &[Rule<GyroType>] = &[
    Rule::any(&["SUPERHEAVY", "SUPER HEAVY"], GyroType::Superheavy),
    Rule::any(&["XL", "EXTRA"], GyroType::Xl),
    Rule::any(&["COMPACT"], GyroType::Compact),
    Rule::any(&["HEAVY"], GyroType::HeavyDuty),
];

static TABLE: LazyLock<HashMap<&'static str, GyroType>> = LazyLock::new(|| rules::table(ALIASES));

pub fn map_gyro_type(raw: &str) -> GyroType {
    rules::resolve("gyro", raw, &TABLE, FALLBACK, GyroType::Standard)
}
