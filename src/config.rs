pub mod settings;
pub mod user;

pub use settings::{AliasMap, NormalizerSettings};
pub use user::{
    ConfigError, ConfigResult, load_settings, load_user_config, parse_settings, user_config_path,
};

/// Merge two settings, preferring values from `primary` over `fallback`.
///
/// Alias maps are merged per category; an alias present in both keeps the
/// primary target.
pub fn merge_settings(
    fallback: Option<NormalizerSettings>,
    primary: Option<NormalizerSettings>,
) -> Option<NormalizerSettings> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) | (None, Some(settings)) => Some(settings),
        (Some(mut fallback), Some(primary)) => {
            for (category, aliases) in primary.aliases {
                fallback
                    .aliases
                    .entry(category)
                    .or_default()
                    .extend(aliases);
            }
            Some(fallback)
        }
    }
}
