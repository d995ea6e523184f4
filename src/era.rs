//! BattleTech eras derived from a unit's introduction year.
//!
//! Eras are half-open year ranges: a threshold year belongs to the later era,
//! so 3050 is already `CLAN_INVASION`.

use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Era {
    EarlySpaceflight,
    AgeOfWar,
    StarLeague,
    SuccessionWars,
    ClanInvasion,
    CivilWar,
    DarkAge,
    IlClan,
}

/// First year of each era after `EARLY_SPACEFLIGHT`.
const ERA_STARTS: &[(i32, Era)] = &[
    (2005, Era::AgeOfWar),
    (2571, Era::StarLeague),
    (2781, Era::SuccessionWars),
    (3050, Era::ClanInvasion),
    (3068, Era::CivilWar),
    (3081, Era::DarkAge),
    (3152, Era::IlClan),
];

impl Era {
    /// Classify an introduction year.
    pub fn from_year(year: i32) -> Era {
        ERA_STARTS
            .iter()
            .take_while(|(start, _)| year >= *start)
            .last()
            .map(|&(_, era)| era)
            .unwrap_or(Era::EarlySpaceflight)
    }

    /// Folder slug with a chronological prefix, e.g. `4-clan-invasion`.
    pub fn folder_name(self) -> &'static str {
        match self {
            Era::EarlySpaceflight => "0-early-spaceflight",
            Era::AgeOfWar => "1-age-of-war",
            Era::StarLeague => "2-star-league",
            Era::SuccessionWars => "3-succession-wars",
            Era::ClanInvasion => "4-clan-invasion",
            Era::CivilWar => "5-civil-war",
            Era::DarkAge => "6-dark-age",
            Era::IlClan => "7-ilclan",
        }
    }
}

impl Vocabulary for Era {
    const ALL: &'static [Self] = &[
        Era::EarlySpaceflight,
        Era::AgeOfWar,
        Era::StarLeague,
        Era::SuccessionWars,
        Era::ClanInvasion,
        Era::CivilWar,
        Era::DarkAge,
        Era::IlClan,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Era::EarlySpaceflight => "EARLY_SPACEFLIGHT",
            Era::AgeOfWar => "AGE_OF_WAR",
            Era::StarLeague => "STAR_LEAGUE",
            Era::SuccessionWars => "SUCCESSION_WARS",
            Era::ClanInvasion => "CLAN_INVASION",
            Era::CivilWar => "CIVIL_WAR",
            Era::DarkAge => "DARK_AGE",
            Era::IlClan => "ILCLAN",
        }
    }
}

canonical_token!(Era);

pub fn map_year_to_era(year: i32) -> Era {
    Era::from_year(year)
}

/// Folder slug for a canonical era string; unknown strings get `99-unknown`.
pub fn get_era_folder_name(era: &str) -> &'static str {
    Era::from_canonical(era)
        .map(Era::folder_name)
        .unwrap_or("99-unknown")
}
