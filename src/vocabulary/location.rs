//! Mech locations.
//!
//! Legacy files spell locations three ways: full words (`Left Arm`),
//! abbreviations (`LA`, `RTC`) and lower-cased armor table keys
//! (`la armor`). All three are looked up exactly, in that order.
//!
//! Anything else is passed through as an uppercased, underscore-joined
//! string. When that string is not itself a canonical location it falls
//! outside the closed set, so it is returned as
//! [`ResolvedLocation::Unrecognized`] rather than silently mixed in with
//! real locations.

use super::Vocabulary;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MechLocation {
    Head,
    CenterTorso,
    LeftTorso,
    RightTorso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    CenterTorsoRear,
    LeftTorsoRear,
    RightTorsoRear,
    FrontLeftLeg,
    FrontRightLeg,
    RearLeftLeg,
    RearRightLeg,
}

impl Vocabulary for MechLocation {
    const ALL: &'static [Self] = &[
        Self::Head,
        Self::CenterTorso,
        Self::LeftTorso,
        Self::RightTorso,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
        Self::CenterTorsoRear,
        Self::LeftTorsoRear,
        Self::RightTorsoRear,
        Self::FrontLeftLeg,
        Self::FrontRightLeg,
        Self::RearLeftLeg,
        Self::RearRightLeg,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::CenterTorso => "CENTER_TORSO",
            Self::LeftTorso => "LEFT_TORSO",
            Self::RightTorso => "RIGHT_TORSO",
            Self::LeftArm => "LEFT_ARM",
            Self::RightArm => "RIGHT_ARM",
            Self::LeftLeg => "LEFT_LEG",
            Self::RightLeg => "RIGHT_LEG",
            Self::CenterTorsoRear => "CENTER_TORSO_REAR",
            Self::LeftTorsoRear => "LEFT_TORSO_REAR",
            Self::RightTorsoRear => "RIGHT_TORSO_REAR",
            Self::FrontLeftLeg => "FRONT_LEFT_LEG",
            Self::FrontRightLeg => "FRONT_RIGHT_LEG",
            Self::RearLeftLeg => "REAR_LEFT_LEG",
            Self::RearRightLeg => "REAR_RIGHT_LEG",
        }
    }
}

canonical_token!(MechLocation);

/// Result of [`map_mech_location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLocation {
    Known(MechLocation),
    /// Legacy passthrough for input no table recognizes
    Unrecognized(String),
}

impl ResolvedLocation {
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedLocation::Known(location) => location.as_str(),
            ResolvedLocation::Unrecognized(token) => token,
        }
    }

    pub fn known(&self) -> Option<MechLocation> {
        match self {
            ResolvedLocation::Known(location) => Some(*location),
            ResolvedLocation::Unrecognized(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.known().is_some()
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResolvedLocation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

const FULL_NAMES: &[(&str, MechLocation)] = &[
    ("Head", MechLocation::Head),
    ("Center Torso", MechLocation::CenterTorso),
    ("Left Torso", MechLocation::LeftTorso),
    ("Right Torso", MechLocation::RightTorso),
    ("Left Arm", MechLocation::LeftArm),
    ("Right Arm", MechLocation::RightArm),
    ("Left Leg", MechLocation::LeftLeg),
    ("Right Leg", MechLocation::RightLeg),
    ("Center Torso (Rear)", MechLocation::CenterTorsoRear),
    ("Left Torso (Rear)", MechLocation::LeftTorsoRear),
    ("Right Torso (Rear)", MechLocation::RightTorsoRear),
    ("Front Left Leg", MechLocation::FrontLeftLeg),
    ("Front Right Leg", MechLocation::FrontRightLeg),
    ("Rear Left Leg", MechLocation::RearLeftLeg),
    ("Rear Right Leg", MechLocation::RearRightLeg),
];

const ABBREVIATIONS: &[(&str, MechLocation)] = &[
    ("HD", MechLocation::Head),
    ("CT", MechLocation::CenterTorso),
    ("LT", MechLocation::LeftTorso),
    ("RT", MechLocation::RightTorso),
    ("LA", MechLocation::LeftArm),
    ("RA", MechLocation::RightArm),
    ("LL", MechLocation::LeftLeg),
    ("RL", MechLocation::RightLeg),
    ("CTR", MechLocation::CenterTorsoRear),
    ("RTC", MechLocation::CenterTorsoRear),
    ("LTR", MechLocation::LeftTorsoRear),
    ("RTL", MechLocation::LeftTorsoRear),
    ("RTR", MechLocation::RightTorsoRear),
    ("FLL", MechLocation::FrontLeftLeg),
    ("FRL", MechLocation::FrontRightLeg),
    ("RLL", MechLocation::RearLeftLeg),
    ("RRL", MechLocation::RearRightLeg),
];

// Keys from MTF armor lines, matched after lower-casing the input.
const ARMOR_KEYS: &[(&str, MechLocation)] = &[
    ("la armor", MechLocation::LeftArm),
    ("ra armor", MechLocation::RightArm),
    ("lt armor", MechLocation::LeftTorso),
    ("rt armor", MechLocation::RightTorso),
    ("ct armor", MechLocation::CenterTorso),
    ("hd armor", MechLocation::Head),
    ("ll armor", MechLocation::LeftLeg),
    ("rl armor", MechLocation::RightLeg),
    ("rtl armor", MechLocation::LeftTorsoRear),
    ("rtr armor", MechLocation::RightTorsoRear),
    ("rtc armor", MechLocation::CenterTorsoRear),
    ("la", MechLocation::LeftArm),
    ("ra", MechLocation::RightArm),
    ("lt", MechLocation::LeftTorso),
    ("rt", MechLocation::RightTorso),
    ("ct", MechLocation::CenterTorso),
    ("hd", MechLocation::Head),
    ("ll", MechLocation::LeftLeg),
    ("rl", MechLocation::RightLeg),
    ("rtl", MechLocation::LeftTorsoRear),
    ("rtr", MechLocation::RightTorsoRear),
    ("rtc", MechLocation::CenterTorsoRear),
];

static FULL_NAME_TABLE: LazyLock<HashMap<&'static str, MechLocation>> =
    LazyLock::new(|| crate::rules::table(FULL_NAMES));
static ABBREVIATION_TABLE: LazyLock<HashMap<&'static str, MechLocation>> =
    LazyLock::new(|| crate::rules::table(ABBREVIATIONS));
static ARMOR_KEY_TABLE: LazyLock<HashMap<&'static str, MechLocation>> =
    LazyLock::new(|| crate::rules::table(ARMOR_KEYS));

/// Map an MTF location string.
///
/// Unrecognized input keeps the legacy behavior (`Turret` -> `TURRET`) but
/// is tagged as [`ResolvedLocation::Unrecognized`].
pub fn map_mech_location(raw: &str) -> ResolvedLocation {
    let clean = raw.trim();
    let exact = FULL_NAME_TABLE
        .get(clean)
        .or_else(|| ABBREVIATION_TABLE.get(clean))
        .or_else(|| ARMOR_KEY_TABLE.get(clean.to_lowercase().as_str()));
    if let Some(&location) = exact {
        return ResolvedLocation::Known(location);
    }

    let passthrough = clean.to_uppercase().replace(' ', "_");
    if let Some(location) = MechLocation::from_canonical(&passthrough) {
        return ResolvedLocation::Known(location);
    }
    log::warn!(
        target: "mtf_normalize::location",
        "Unrecognized location '{}', passing through as '{}'",
        clean,
        passthrough
    );
    ResolvedLocation::Unrecognized(passthrough)
}
