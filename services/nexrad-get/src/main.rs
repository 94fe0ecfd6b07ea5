//! NEXRAD Level II archive search tool.
//!
//! Finds the radar volumes whose coverage reaches a query region and
//! altitude over a time range, and optionally downloads them:
//! - Station selection from a bounding box and height, or explicit stations
//! - Anonymous access to the public `noaa-nexrad-level2` bucket
//! - Bounded concurrent downloads

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use nexrad_common::{BoundingDomain, NexradError, TimeRange};
use nexrad_search::{NexradSearch, RadiusMode, SearchConfig};

#[derive(Parser, Debug)]
#[command(name = "nexrad-get")]
#[command(about = "Find and download NEXRAD Level II radar volumes")]
struct Args {
    /// Start of the time range (RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD, UTC)
    #[arg(long, env = "NEXRAD_START")]
    start: String,

    /// End of the time range (exclusive)
    #[arg(long, env = "NEXRAD_END")]
    end: String,

    /// Query box as maxlat,maxlon,minlat,minlon
    #[arg(long, env = "NEXRAD_DOMAIN", allow_hyphen_values = true)]
    domain: Option<String>,

    /// Query height in meters above sea level (default 10000)
    #[arg(long, env = "NEXRAD_HEIGHT")]
    height: Option<f64>,

    /// Station id to search instead of a domain (repeatable)
    #[arg(long = "station", value_delimiter = ',')]
    stations: Vec<String>,

    /// Download matching files into this existing directory
    #[arg(long, env = "NEXRAD_DOWNLOAD_DIR")]
    download_dir: Option<PathBuf>,

    /// Maximum concurrent downloads
    #[arg(long, env = "NEXRAD_THREADS")]
    threads: Option<usize>,

    /// Use the same coverage radius for every station and height
    #[arg(long)]
    fixed_radius: bool,

    /// Log found stations and keys
    #[arg(short, long)]
    verbose: bool,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, env = "NEXRAD_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Search configuration file (YAML)
    #[arg(long, env = "NEXRAD_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if let Err(e) = init_tracing(&args) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<NexradError>()
            .map(NexradError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let mut level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // Verbose output is logged at info
    if args.verbose && level < Level::INFO {
        level = Level::INFO;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn build_config(args: &Args) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SearchConfig::default(),
    };

    if args.verbose {
        config.verbose = true;
    }
    if let Some(threads) = args.threads {
        config.max_concurrent_downloads = threads;
    }
    if args.fixed_radius {
        config.radius_mode = RadiusMode::Fixed;
    }

    Ok(config)
}

async fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    let range = TimeRange::parse(&args.start, &args.end).map_err(NexradError::from)?;

    let search = NexradSearch::new(config).context("Failed to open archive")?;

    let keys = if !args.stations.is_empty() {
        search
            .find_by_stations(range.start, range.end, args.stations.as_slice())
            .await
    } else if let Some(domain) = &args.domain {
        let mut domain = BoundingDomain::from_arg_string(domain).map_err(NexradError::from)?;
        if let Some(height) = args.height {
            domain = domain.with_height(height);
        }
        search.find(range.start, range.end, &domain).await?
    } else {
        return Err(NexradError::InvalidDomain(
            "either --domain or --station is required".to_string(),
        )
        .into());
    };

    info!(count = keys.len(), "Search complete");

    let Some(dir) = &args.download_dir else {
        print_lines(&keys, args.json)?;
        return Ok(());
    };

    let report = search.download_with_report(dir, &keys).await?;

    info!(
        success = report.succeeded,
        failed = report.failed.len(),
        dir = %dir.display(),
        "Download session complete"
    );

    let paths: Vec<String> = report
        .paths
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    print_lines(&paths, args.json)
}

fn print_lines(lines: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(lines)?);
    } else {
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}
