use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{DateTime, FixedOffset, Local};
use clap::{Args, Parser, Subcommand};
use sidereal_base::{
    GeoLocation, HouseSystem, LunarNode, angular_separation, ascendant_tropical_deg,
    ayanamsa_deg, classify_separation, deg_to_dms, local_sidereal_time, lunar_node_deg,
    nakshatra_from_longitude, rashi_from_longitude, tropical_to_sidereal,
};
use sidereal_chart::{ChartConfig, build_chart_at};
use sidereal_config::AppConfig;
use sidereal_core::PositionTable;
use sidereal_time::{Instant, parse_civil, parse_utc_offset};

mod render;

#[derive(Parser)]
#[command(name = "sidereal", version, about = "Sidereal (Lahiri) chart calculator")]
struct Cli {
    /// Configuration file (default: $SIDEREAL_CONFIG, then configs/sidereal.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TimeArgs {
    /// Civil date/time: 2024-03-20T12:00, or with an offset, 2024-03-20T12:00+03:30
    #[arg(long)]
    date: String,
    /// UTC offset (±HH:MM) to interpret --date in, instead of the local zone
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<String>,
}

impl TimeArgs {
    fn resolve(&self) -> anyhow::Result<DateTime<FixedOffset>> {
        let resolved = match &self.utc_offset {
            Some(offset) => {
                let tz = parse_utc_offset(offset)?;
                parse_civil(&self.date, &tz)
            }
            None => parse_civil(&self.date, &Local),
        };
        resolved.with_context(|| format!("--date {}", self.date))
    }
}

#[derive(Args)]
struct PlaceArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
}

impl PlaceArgs {
    /// Flags first, then `[location]` from the config file.
    fn resolve(&self, config: &AppConfig) -> anyhow::Result<GeoLocation> {
        let fallback = config.location;
        let lat = self.lat.or(fallback.map(|l| l.latitude));
        let lon = self.lon.or(fallback.map(|l| l.longitude));
        let (Some(lat), Some(lon)) = (lat, lon) else {
            bail!("--lat and --lon are required (or set [location] in the config file)");
        };
        GeoLocation::new(lat, lon).context("invalid location")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: ascendant, houses, bodies and aspects
    Chart {
        #[command(flatten)]
        time: TimeArgs,
        #[command(flatten)]
        place: PlaceArgs,
        /// Position table (TOML or JSON); overrides [ephemeris] positions
        #[arg(long)]
        positions: Option<PathBuf>,
        /// House system: equal or whole_sign
        #[arg(long)]
        house_system: Option<HouseSystem>,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Lahiri ayanamsa at a date
    Ayanamsa {
        #[command(flatten)]
        time: TimeArgs,
    },
    /// Ascendant for a date and place
    Ascendant {
        #[command(flatten)]
        time: TimeArgs,
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// Mean lunar nodes at a date
    Node {
        #[command(flatten)]
        time: TimeArgs,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Major aspect between two longitudes
    Aspect {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(log_filter(verbose));
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = AppConfig::load(cli.config.as_deref())?;
    if let Some(source) = &config.source {
        log::info!("using configuration {}", source.display());
    }

    match cli.command {
        Commands::Chart {
            time,
            place,
            positions,
            house_system,
            json,
        } => {
            let location = place.resolve(&config)?;
            let civil = time.resolve()?;
            let table = match positions {
                Some(path) => PositionTable::load(&path)
                    .with_context(|| format!("could not load positions from {}", path.display()))?,
                None => config.load_position_table()?.context(
                    "no position table: pass --positions or set [ephemeris] positions in the config",
                )?,
            };
            let chart_config = ChartConfig::default()
                .with_house_system(house_system.unwrap_or(config.chart.house_system));
            let chart = build_chart_at(&table, location, civil, &chart_config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                render::print_chart(&chart);
            }
        }

        Commands::Ayanamsa { time } => {
            let instant = Instant::from_datetime(&time.resolve()?);
            let aya = ayanamsa_deg(&instant);
            println!("JD (UT): {:.6}", instant.jd_ut);
            println!("JD (TT): {:.6}", instant.jd_tt);
            println!("Ayanamsa (Lahiri): {aya:.6} deg ({})", deg_to_dms(aya));
        }

        Commands::Ascendant { time, place } => {
            let location = place.resolve(&config)?;
            let instant = Instant::from_datetime(&time.resolve()?);
            let lst = local_sidereal_time(&instant, &location);
            let tropical = ascendant_tropical_deg(&instant, &location)?;
            let sidereal = tropical_to_sidereal(tropical, ayanamsa_deg(&instant));
            let info = rashi_from_longitude(sidereal);
            println!("LST: {lst:.6} h");
            println!("Tropical: {tropical:.4} deg");
            println!("Sidereal: {sidereal:.4} deg");
            println!(
                "{} ({}) {}",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms
            );
        }

        Commands::Node { time } => {
            let instant = Instant::from_datetime(&time.resolve()?);
            let aya = ayanamsa_deg(&instant);
            for &node in LunarNode::all() {
                let tropical = lunar_node_deg(node, instant.centuries_tt());
                let sidereal = tropical_to_sidereal(tropical, aya);
                let info = rashi_from_longitude(sidereal);
                println!(
                    "{}: {tropical:.4} deg tropical, {sidereal:.4} deg sidereal ({} {})",
                    node.name(),
                    info.rashi.name(),
                    info.dms
                );
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}, lord {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.nakshatra.lord(),
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }

        Commands::Aspect { a, b } => {
            let sep = angular_separation(a, b);
            match classify_separation(sep) {
                Some((kind, delta)) => {
                    println!("{} (separation {sep:.4} deg, orb {delta:.4} deg)", kind.name())
                }
                None => println!("No major aspect (separation {sep:.4} deg)"),
            }
        }

        Commands::Dms { deg } => {
            let sign = if deg < 0.0 { "-" } else { "" };
            println!("{sign}{}", deg_to_dms(deg));
        }
    }
    Ok(())
}
