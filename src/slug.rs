//! Identifier slugs for converted units and equipment.
//!
//! Slugs are lower-case and dash-separated with punctuation stripped. They
//! are not guaranteed unique: `Atlas` / `AS7-D` and `Atlas AS7` / `D` both
//! become `atlas-as7-d`.

/// Collapse runs of dashes and trim dashes from both ends.
fn squeeze_dashes(s: &str) -> String {
    s.split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Canonical unit ID from chassis and model, e.g. `Atlas` + `AS7-D` -> `atlas-as7-d`.
pub fn generate_id_from_name(chassis: &str, model: &str) -> String {
    let combined = format!("{}-{}", chassis, model).to_lowercase();
    let id: String = combined
        .chars()
        .filter_map(|c| match c {
            ' ' | '/' => Some('-'),
            '(' | ')' | '\'' | '"' | '.' | ',' => None,
            other => Some(other),
        })
        .collect();
    squeeze_dashes(&id)
}

/// Canonical equipment ID, e.g. `Gauss Rifle (Clan)` -> `gauss-rifle-clan`.
///
/// Tech base suffixes are shortened: `(Inner Sphere)` becomes `is`.
pub fn normalize_equipment_id(name: &str) -> String {
    let lowered = name
        .to_lowercase()
        .replace("(clan)", "clan")
        .replace("(is)", "is")
        .replace("(inner sphere)", "is");
    let id: String = lowered
        .chars()
        .filter_map(|c| match c {
            ' ' | '/' => Some('-'),
            '(' | ')' | '\'' | '"' => None,
            other => Some(other),
        })
        .collect();
    squeeze_dashes(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_from_name() {
        assert_eq!(generate_id_from_name("Atlas", "AS7-D"), "atlas-as7-d");
        assert_eq!(generate_id_from_name("Mad Cat", "Prime"), "mad-cat-prime");
        assert_eq!(
            generate_id_from_name("Hunchback", "HBK-4G (Kali's)"),
            "hunchback-hbk-4g-kalis"
        );
        assert_eq!(generate_id_from_name("Ost/Scout", "OSR-2C.b"), "ost-scout-osr-2cb");
    }

    #[test]
    fn test_generate_id_collapses_and_trims_dashes() {
        assert_eq!(generate_id_from_name(" Locust ", "-LCT-1V-"), "locust-lct-1v");
        assert_eq!(generate_id_from_name("", ""), "");
        assert_eq!(generate_id_from_name("(", ")"), "");
    }

    #[test]
    fn test_generate_id_collisions_are_possible() {
        assert_eq!(
            generate_id_from_name("Atlas", "AS7-D"),
            generate_id_from_name("Atlas AS7", "D")
        );
    }

    #[test]
    fn test_normalize_equipment_id() {
        assert_eq!(normalize_equipment_id("Gauss Rifle (Clan)"), "gauss-rifle-clan");
        assert_eq!(normalize_equipment_id("Medium Laser (IS)"), "medium-laser-is");
        assert_eq!(normalize_equipment_id("ER PPC (Inner Sphere)"), "er-ppc-is");
        assert_eq!(normalize_equipment_id("LRM 20/Artemis IV"), "lrm-20-artemis-iv");
        assert_eq!(normalize_equipment_id("\"Ultra\" AC/5"), "ultra-ac-5");
    }

    #[test]
    fn test_normalize_equipment_id_keeps_dots_and_commas() {
        // Only generate_id_from_name strips these
        assert_eq!(normalize_equipment_id("Ammo 2.5t"), "ammo-2.5t");
        assert_eq!(normalize_equipment_id("  "), "");
    }
}
