//! Heat sink types.

use super::Vocabulary;
use crate::rules::{self, Rule};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatSinkType {
    Single,
    Double,
    DoubleClan,
    Compact,
    Laser,
}

impl Vocabulary for HeatSinkType {
    const ALL: &'static [Self] = &[
        Self::Single,
        Self::Double,
        Self::DoubleClan,
        Self::Compact,
        Self::Laser,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Double => "DOUBLE",
            Self::DoubleClan => "DOUBLE_CLAN",
            Self::Compact => "COMPACT",
            Self::Laser => "LASER",
        }
    }
}

canonical_token!(HeatSinkType);

const ALIASES: &[(&str, HeatSinkType)] = &[
    ("Single", HeatSinkType::Single),
    ("Single Heat Sink", HeatSinkType::Single),
    ("Single Heat Sinks", HeatSinkType::Single),
    ("Double", HeatSinkType::Double),
    ("Double Heat Sink", HeatSinkType::Double),
    ("Double Heat Sinks", HeatSinkType::Double),
    ("Double (IS)", HeatSinkType::Double),
    ("Double (Clan)", HeatSinkType::DoubleClan),
    ("Clan Double Heat Sink", HeatSinkType::DoubleClan),
    ("Clan Double", HeatSinkType::DoubleClan),
    ("Compact", HeatSinkType::Compact),
    ("Compact Heat Sink", HeatSinkType::Compact),
    ("Laser", HeatSinkType::Laser),
    ("Laser Heat Sink", HeatSinkType::Laser),
];

const FALLBACK: &[Rule<HeatSinkType>] = &[
    Rule::all(&["DOUBLE", "CLAN"], HeatSinkType::DoubleClan),
    Rule::any(&["DOUBLE"], HeatSinkType::Double),
    Rule::any(&["COMPACT"], HeatSinkType::Compact),
    Rule::any(&["LASER"], HeatSinkType::Laser),
];

static TABLE: LazyLock<HashMap<&'static str, HeatSinkType>> = LazyLock::new(|| rules::table(ALIASES));

pub fn map_heat_sink_type(raw: &str) -> HeatSinkType {
    rules::resolve("heat-sink", raw, &TABLE, FALLBACK, HeatSinkType::Single)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_aliases() {
        assert_eq!(map_heat_sink_type("Double (IS)"), HeatSinkType::Double);
        assert_eq!(map_heat_sink_type("Clan Double"), HeatSinkType::DoubleClan);
        assert_eq!(map_heat_sink_type("Laser Heat Sink"), HeatSinkType::Laser);
    }

    #[test]
    fn test_keyword_fallback() {
        assert_eq!(map_heat_sink_type("10 Double [Clan]"), HeatSinkType::DoubleClan);
        assert_eq!(map_heat_sink_type("IS Double Heat Sink Prototype"), HeatSinkType::Double);
        assert_eq!(map_heat_sink_type("compact heat sinks"), HeatSinkType::Compact);
        assert_eq!(map_heat_sink_type("Clan Laser"), HeatSinkType::Laser);
    }

    #[test]
    fn test_unknown_defaults_to_single() {
        assert_eq!(map_heat_sink_type("10 Heat Sinks"), HeatSinkType::Single);
        assert_eq!(map_heat_sink_type(""), HeatSinkType::Single);
    }
}
