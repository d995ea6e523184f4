use serde::Deserialize;
use std::collections::BTreeMap;

/// Aliases for one category: legacy spelling -> canonical token.
pub type AliasMap = BTreeMap<String, String>;

/// Contents of an `mtf-normalize.toml` file.
///
/// ```toml
/// [aliases.engine]
/// "XL Engine (Lyran)" = "XL"
///
/// [aliases.location]
/// "Left Arm Actuator" = "LEFT_ARM"
/// ```
///
/// Category keys use the kebab-case names from [`crate::Category`]; they
/// are checked when the settings are handed to a `Normalizer`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, serde::Serialize)]
pub struct NormalizerSettings {
    #[serde(default)]
    pub aliases: BTreeMap<String, AliasMap>,
}
