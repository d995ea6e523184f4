use clap::{Parser, Subcommand};
use mtf_normalize::config::{self, NormalizerSettings};
use mtf_normalize::{Category, Normalizer, Vocabulary};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Normalize legacy MTF/BLK unit-definition tokens to canonical values
#[derive(Parser)]
#[command(name = "mtf-normalize")]
#[command(version)]
#[command(about = "Normalize legacy MTF/BLK unit-definition tokens to canonical values")]
struct Cli {
    /// Alias override file (default: the user config file, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize tokens of one category (reads stdin lines when no values are given)
    Map {
        /// Token category (e.g. engine, armor, heat-sink, location)
        category: String,

        /// Raw tokens to normalize
        values: Vec<String>,

        /// Emit one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Print the era and era folder for an introduction year
    Era {
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
    /// Print the folder slug for a canonical rules level
    RulesFolder { level: String },
    /// Print the unit ID for a chassis and model
    Id { chassis: String, model: String },
    /// Print the equipment ID for an equipment name
    EquipmentId { name: String },
    /// List categories and their canonical tokens
    Categories,
}

#[derive(Serialize)]
struct MappedToken<'a> {
    category: Category,
    input: &'a str,
    token: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> mtf_normalize::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Map {
            category,
            values,
            json,
        } => {
            let category: Category = category.parse()?;
            let normalizer = build_normalizer(cli.config)?;

            let inputs = if values.is_empty() {
                io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?
            } else {
                values
            };

            for input in &inputs {
                let token = normalizer.normalize(category, input);
                if json {
                    let record = MappedToken {
                        category,
                        input,
                        token,
                    };
                    let line = serde_json::to_string(&record)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    writeln!(out, "{}", line)?;
                } else {
                    writeln!(out, "{}", token)?;
                }
            }
        }
        Commands::Era { year } => {
            let era = mtf_normalize::map_year_to_era(year);
            writeln!(out, "{}\t{}", era, era.folder_name())?;
        }
        Commands::RulesFolder { level } => {
            writeln!(out, "{}", mtf_normalize::get_rules_level_folder_name(level.trim()))?;
        }
        Commands::Id { chassis, model } => {
            writeln!(out, "{}", mtf_normalize::generate_id_from_name(&chassis, &model))?;
        }
        Commands::EquipmentId { name } => {
            writeln!(out, "{}", mtf_normalize::normalize_equipment_id(&name))?;
        }
        Commands::Categories => {
            for &category in Category::ALL {
                writeln!(out, "{}: {}", category, category.tokens().join(", "))?;
            }
            let eras: Vec<_> = mtf_normalize::Era::ALL.iter().map(|era| era.as_str()).collect();
            writeln!(out, "era: {}", eras.join(", "))?;
        }
    }

    Ok(())
}

/// Build the normalizer from `--config`, or the user config file if present.
fn build_normalizer(config_path: Option<PathBuf>) -> mtf_normalize::Result<Normalizer> {
    let settings: Option<NormalizerSettings> = match config_path {
        Some(path) => Some(config::load_settings(&path)?),
        None => config::load_user_config()?,
    };
    match settings {
        Some(settings) => Normalizer::with_settings(&settings),
        None => Ok(Normalizer::new()),
    }
}
