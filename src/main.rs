use anyhow::{Context, Result};
use clap::Parser;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use address_enrich::geocode::{GeocoderConfig, NoGeocoder, NominatimGeocoder, DEFAULT_NOMINATIM_URL};
use address_enrich::metro::ZipDatabase;
use address_enrich::models::ZipInfo;
use address_enrich::pipeline::{Enricher, MailingList};
use address_enrich::progress::{create_spinner, format_duration, set_log_only};
use address_enrich::reconcile::ReverseGeocoder;
use address_enrich::safety::validate_output_paths;
use address_enrich::sources::{
    read_crm_file, read_mailing_list_file, write_records_file, write_report_file,
};
use address_enrich::tables::{ReferencePaths, ReferenceTables};
use address_enrich::zipdb::SqliteZipDatabase;

#[derive(Parser)]
#[command(name = "address-enrich")]
#[command(about = "Reconcile, normalize and metro-classify CRM mailing addresses")]
struct Args {
    /// CRM export (CSV with CRM field names as headers)
    crm: PathBuf,

    /// Change-set output (JSON)
    output: PathBuf,

    /// Mailing-list export (CSV)
    #[arg(long)]
    mailing_list: Option<PathBuf>,

    /// Zip -> metro CSV ("Zip Code", "Primary CBSA Name")
    #[arg(long)]
    zip_to_metro: Option<PathBuf>,

    /// (city, state) -> metro CSV ("city", "state", "metro")
    #[arg(long)]
    city_to_metro: Option<PathBuf>,

    /// Address-label CSV ("label", "street", "city", "state", "zipcode", "country")
    #[arg(long)]
    address_labels: Option<PathBuf>,

    /// SQLite zip database with a simple_zipcode table
    #[arg(long)]
    zip_db: Option<PathBuf>,

    /// Also write every enriched record as CSV
    #[arg(long)]
    result_csv: Option<PathBuf>,

    /// Write run statistics as JSON
    #[arg(long)]
    stats: Option<PathBuf>,

    #[arg(long, default_value = "0")]
    workers: usize,

    /// Hide progress bars and log progress lines instead
    #[arg(long)]
    log_only: bool,

    /// Skip reverse geocoding; coordinate entries never match
    #[arg(long)]
    no_geocode: bool,

    #[arg(long, env = "NOMINATIM_URL", default_value = DEFAULT_NOMINATIM_URL)]
    geocoder_url: String,

    #[arg(long, env = "GEOCODER_USER_AGENT")]
    user_agent: Option<String>,

    #[arg(long, default_value = "10")]
    geocoder_timeout_secs: u64,

    #[arg(long, default_value = "1000")]
    geocoder_min_interval_ms: u64,
}

impl Args {
    fn geocoder_config(&self) -> GeocoderConfig {
        let defaults = GeocoderConfig::default();
        GeocoderConfig {
            base_url: self.geocoder_url.clone(),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: Duration::from_secs(self.geocoder_timeout_secs),
            min_interval: Duration::from_millis(self.geocoder_min_interval_ms),
        }
    }

    fn source_paths(&self) -> Vec<&Path> {
        let mut paths = vec![self.crm.as_path()];
        for path in [
            &self.mailing_list,
            &self.zip_to_metro,
            &self.city_to_metro,
            &self.address_labels,
            &self.zip_db,
        ]
        .into_iter()
        .flatten()
        {
            paths.push(path.as_path());
        }
        paths
    }
}

fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    set_log_only(args.log_only);

    if args.workers > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.workers)
            .build_global()
            .context("Failed to set thread pool size")?;
    }

    let mut outputs = vec![(args.output.as_path(), "json")];
    if let Some(ref path) = args.result_csv {
        outputs.push((path.as_path(), "csv"));
    }
    if let Some(ref path) = args.stats {
        outputs.push((path.as_path(), "json"));
    }
    validate_output_paths(&outputs, &args.source_paths())?;

    let start = Instant::now();

    let spinner = create_spinner("Loading reference tables");
    let tables = ReferenceTables::load(&ReferencePaths {
        zip_to_metro: args.zip_to_metro.as_deref(),
        city_state_to_metro: args.city_to_metro.as_deref(),
        addresses: args.address_labels.as_deref(),
    })?;
    spinner.finish_with_message("Loaded reference tables");

    let spinner = create_spinner("Reading CRM export");
    let records = read_crm_file(&args.crm)?;
    let mailing_list = match args.mailing_list {
        Some(ref path) => read_mailing_list_file(path)?,
        None => MailingList::default(),
    };
    spinner.finish_with_message(format!(
        "Read {} CRM records, {} mailing-list entries",
        records.len(),
        mailing_list.len()
    ));
    info!(
        records = records.len(),
        mailing_list = mailing_list.len(),
        "loaded sources"
    );

    let sqlite_db;
    let empty_db: FxHashMap<String, ZipInfo> = FxHashMap::default();
    let zip_db: &dyn ZipDatabase = match args.zip_db {
        Some(ref path) => {
            sqlite_db = SqliteZipDatabase::open(path)
                .with_context(|| format!("Failed to open zip database {}", path.display()))?;
            &sqlite_db
        }
        None => &empty_db,
    };

    let nominatim;
    let geocoder: &dyn ReverseGeocoder = if args.no_geocode {
        &NoGeocoder
    } else {
        nominatim = NominatimGeocoder::new(args.geocoder_config())
            .context("Failed to build geocoder client")?;
        &nominatim
    };

    let enricher = Enricher::new(&tables, geocoder, zip_db);
    let (report, mut stats) = enricher.enrich_all(records, &mailing_list);

    let spinner = create_spinner("Writing outputs");
    write_report_file(&args.output, &report)?;
    if let Some(ref path) = args.result_csv {
        write_records_file(path, &report.records)?;
    }
    spinner.finish_with_message("Wrote outputs");

    stats.elapsed_seconds = start.elapsed().as_secs_f64();
    stats.log_summary("enrich");
    if let Some(ref path) = args.stats {
        stats
            .write_to_file(path)
            .with_context(|| format!("Failed to write stats to {}", path.display()))?;
    }

    println!("\n{:=<60}", "");
    println!("Enrichment complete!");
    println!("  Records: {}", stats.total_records);
    println!(
        "  Changed: {} ({:.1}%)",
        stats.records_changed,
        stats.change_rate()
    );
    println!("  Failed: {}", stats.failures);
    println!("  Output: {}", args.output.display());
    println!("  Elapsed: {}", format_duration(start.elapsed()));
    println!("{:=<60}", "");

    Ok(())
}
