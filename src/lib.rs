//! Normalization of legacy MTF/BLK unit-definition tokens.
//!
//! Translates historically inconsistent strings (engine names, armor types,
//! location codes, ...) into canonical enumeration values, derives eras
//! from introduction years and builds ID slugs. All mapping functions are
//! pure and total.

#[macro_use]
pub mod vocabulary;

pub mod config;
pub mod era;
pub mod error;
pub mod normalizer;
pub mod rules;
pub mod slug;

pub use era::{Era, get_era_folder_name, map_year_to_era};
pub use error::{Error, Result};
pub use normalizer::Normalizer;
pub use slug::{generate_id_from_name, normalize_equipment_id};
pub use vocabulary::{
    ArmorType, Category, CockpitType, EngineType, GyroType, HeatSinkType, MechConfig,
    MechLocation, ResolvedLocation, RulesLevel, StructureType, TechBase, UnitType, Vocabulary,
    get_rules_level_folder_name, map_armor_type, map_cockpit_type, map_engine_type, map_gyro_type,
    map_heat_sink_type, map_mech_config, map_mech_location, map_rules_level, map_structure_type,
    map_tech_base, map_unit_type,
};
