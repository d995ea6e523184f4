//! Tech base (faction technology affiliation).

use super::Vocabulary;
use crate::rules;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechBase {
    InnerSphere,
    Clan,
    Mixed,
    Both,
}

impl Vocabulary for TechBase {
    const ALL: &'static [Self] = &[Self::InnerSphere, Self::Clan, Self::Mixed, Self::Both];

    fn as_str(self) -> &'static str {
        match self {
            Self::InnerSphere => "INNER_SPHERE",
            Self::Clan => "CLAN",
            Self::Mixed => "MIXED",
            Self::Both => "BOTH",
        }
    }
}

canonical_token!(TechBase);

const ALIASES: &[(&str, TechBase)] = &[
    ("Inner Sphere", TechBase::InnerSphere),
    ("IS", TechBase::InnerSphere),
    ("IS Level 1", TechBase::InnerSphere),
    ("IS Level 2", TechBase::InnerSphere),
    ("IS Level 3", TechBase::InnerSphere),
    ("IS Level 4", TechBase::InnerSphere),
    ("Clan", TechBase::Clan),
    ("CL", TechBase::Clan),
    ("Clan Level 2", TechBase::Clan),
    ("Clan Level 3", TechBase::Clan),
    ("Mixed", TechBase::Mixed),
    ("Mixed (IS Chassis)", TechBase::Mixed),
    ("Mixed (Clan Chassis)", TechBase::Mixed),
    ("Both", TechBase::Both),
    // BLK type tag
    ("0", TechBase::InnerSphere),
    ("1", TechBase::Clan),
    ("2", TechBase::Mixed),
];

static TABLE: LazyLock<HashMap<&'static str, TechBase>> = LazyLock::new(|| rules::table(ALIASES));

/// Map an MTF/BLK tech base string.
///
/// Retries the lookup in title case (`inner sphere` -> `Inner Sphere`)
/// before falling back to `INNER_SPHERE`.
pub fn map_tech_base(raw: &str) -> TechBase {
    let clean = raw.trim();
    if let Some(&tech_base) = TABLE.get(clean) {
        return tech_base;
    }
    if let Some(&tech_base) = TABLE.get(title_case(clean).as_str()) {
        return tech_base;
    }
    rules::resolve_unlisted("tech-base", clean, &[], TechBase::InnerSphere)
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
