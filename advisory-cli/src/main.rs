use anyhow::{Context, Result};
use advisory_core::{
    compare_yields, options, resolve, AdvisoryReport, AdvisoryRequest, ReferenceTables, Resolution,
    TableSource,
};
use advisory_ingest::CsvTableSource;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "crop-advisory",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CROP_ADVISORY_BUILD_SHA"), ")"),
    about = "Offline crop advisory: soil, season and rainfall in, crop recommendation out"
)]
struct Cli {
    /// Directory with crop_rules.csv, fertilizer.csv, yield.csv, market_price.csv
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Debug logging on stderr (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct FieldArgs {
    /// Soil type (alluvial, black, red, laterite, sandy, loamy, clay)
    #[arg(long)]
    soil: String,

    /// Season (kharif, rabi, zaid)
    #[arg(long)]
    season: String,

    /// Rainfall level (low, medium, high)
    #[arg(long)]
    rainfall: String,

    /// Prefer a climate-resilient crop (millets, bajra, pulses) for this soil
    #[arg(long)]
    climate_mode: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend a crop for the given field conditions
    Recommend {
        #[command(flatten)]
        field: FieldArgs,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Chart average yields of the crops listed for a soil
    Compare {
        #[arg(long)]
        soil: String,

        /// With --rainfall, highlight the crop that would be recommended
        #[arg(long, requires = "rainfall")]
        season: Option<String>,

        #[arg(long, requires = "season")]
        rainfall: Option<String>,

        #[arg(long)]
        climate_mode: bool,
    },

    /// Write the advisory document for the given field conditions
    Report {
        #[command(flatten)]
        field: FieldArgs,

        /// Output file (default from config: crop_advisory.txt)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List the soils, seasons and rainfall levels the rule tables know about
    Options,

    /// Manage ~/.crop-advisory/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = config::load_config()?;
    let data_dir = cfg.data_dir(cli.data_dir);

    match cli.command {
        Command::Recommend { field, json } => {
            let request = field.into_request(&cfg);
            let tables = load_tables(&data_dir)?;
            let resolution = resolve(&request, &tables);
            if json {
                println!("{}", render::format_json(&resolution)?);
            } else {
                match resolution {
                    Resolution::Matched { tier, recommendation } => {
                        print!("{}", render::format_recommendation(&recommendation, tier));
                    }
                    Resolution::NoMatch => println!("{}", render::NO_ADVISORY),
                }
            }
        }

        Command::Compare {
            soil,
            season,
            rainfall,
            climate_mode,
        } => {
            let tables = load_tables(&data_dir)?;
            let recommended = match (season, rainfall) {
                (Some(season), Some(rainfall)) => {
                    let request = FieldArgs {
                        soil: soil.clone(),
                        season,
                        rainfall,
                        climate_mode,
                    }
                    .into_request(&cfg);
                    resolve(&request, &tables).into_recommendation().map(|r| r.crop)
                }
                _ => None,
            };
            let cmp = compare_yields(&soil, recommended.as_deref(), &tables);
            print!("{}", render::format_comparison(&cmp));
        }

        Command::Report { field, out } => {
            let request = field.into_request(&cfg);
            let tables = load_tables(&data_dir)?;
            let out = out.unwrap_or_else(|| cfg.report.out.clone());
            write_report(&cfg, &request, &tables, &out)?;
        }

        Command::Options => {
            println!("Soils: {}", options::SOILS.join(", "));
            println!("Seasons: {}", options::SEASONS.join(", "));
            println!("Rainfall: {}", options::RAINFALL_LEVELS.join(", "));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config(&cfg)?,
        },
    }

    Ok(())
}

impl FieldArgs {
    fn into_request(self, cfg: &Config) -> AdvisoryRequest {
        warn_unknown(&self);
        AdvisoryRequest::new(
            self.soil,
            self.season,
            self.rainfall,
            self.climate_mode || cfg.advisory.climate_mode,
        )
    }
}

/// Unknown values still go through resolution; the rule tables may know them.
fn warn_unknown(field: &FieldArgs) {
    if !options::is_known_soil(&field.soil) {
        tracing::warn!(soil = %field.soil, "unrecognised soil type");
    }
    if !options::is_known_season(&field.season) {
        tracing::warn!(season = %field.season, "unrecognised season");
    }
    if !options::is_known_rainfall(&field.rainfall) {
        tracing::warn!(rainfall = %field.rainfall, "unrecognised rainfall level");
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_tables(data_dir: &Path) -> Result<ReferenceTables> {
    CsvTableSource::new(data_dir)
        .load_tables()
        .with_context(|| format!("loading reference tables from {} (pass --data-dir <dir>)", data_dir.display()))
}

fn write_report(cfg: &Config, request: &AdvisoryRequest, tables: &ReferenceTables, out: &Path) -> Result<()> {
    let Some(rec) = resolve(request, tables).into_recommendation() else {
        println!("{} No report written.", render::NO_ADVISORY);
        return Ok(());
    };

    let mut text = AdvisoryReport::new(cfg.report.title.as_str(), &rec).render();
    text.push_str(&format!(
        "\nGenerated {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));

    fs::write(out, text).with_context(|| format!("write {}", out.display()))?;
    println!("Wrote {} ({})", out.display(), rec.crop);
    Ok(())
}
