use anyhow::{Context, Result, bail};
use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};

use saju_ganji::FourPillars;
use saju_search::{TermSearchConfig, term_info, terms_for_year};
use saju_sinsal::{catalog, info, match_chart};
use saju_time::{DateAdapter, backend};

#[derive(Parser)]
#[command(name = "saju", about = "Solar-term and sinsal calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// All 24 solar-term instants for a year
    Terms {
        /// Cycle year (opens at Ipchun of this year)
        year: i32,
        /// IANA zone for the printed instants
        #[arg(long, default_value = "Asia/Seoul")]
        zone: String,
    },
    /// Current and next solar term for an instant
    Now {
        /// IANA zone of the query
        #[arg(long, default_value = "Asia/Seoul")]
        zone: String,
        /// Civil time "YYYY-MM-DD HH:MM:SS" in the zone; defaults to now
        #[arg(long)]
        at: Option<String>,
    },
    /// Sinsal patterns of a four-pillar chart
    Chart {
        /// Four hanja pillars, year first, e.g. "甲寅 丙寅 戊卯 庚午"
        pillars: String,
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// The pattern metadata catalog
    Patterns,
}

/// Parse a civil time in a specific zone.
fn parse_local(s: &str, tz: Tz) -> Result<chrono::DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("invalid datetime {s:?}, use YYYY-MM-DD HH:MM:SS"))?;
    match tz.from_local_datetime(&naive).single() {
        Some(dt) => Ok(dt),
        None => bail!("ambiguous or invalid local time {s:?} in {tz}"),
    }
}

fn run_terms(year: i32, zone: &str) -> Result<()> {
    let adapter = backend();
    let config = TermSearchConfig::default();
    let table = terms_for_year(adapter, year, zone, &config)
        .with_context(|| format!("term table for {year} failed"))?;
    for event in &table {
        println!(
            "{:2}  {}  {:>5.1} deg  {}",
            event.term.ordinal(),
            event.term,
            event.term.target_longitude_deg(),
            adapter.to_iso(&event.instant)
        );
    }
    Ok(())
}

fn run_now(zone: &str, at: Option<&str>) -> Result<()> {
    let tz: Tz = zone
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown zone {zone:?}"))?;
    let query = match at {
        Some(s) => parse_local(s, tz)?,
        None => chrono::Utc::now().with_timezone(&tz),
    };

    let adapter = backend();
    let config = TermSearchConfig::default();
    let info = term_info(adapter, &query, &config).context("term classification failed")?;

    println!(
        "current: {}  since {}  ({} days ago)",
        info.current,
        adapter.to_iso(&info.current_instant),
        info.days_since
    );
    println!(
        "next:    {}  at {}  (in {} days)",
        info.next,
        adapter.to_iso(&info.next_instant),
        info.days_until
    );
    Ok(())
}

fn run_chart(pillars: &str, json: bool) -> Result<()> {
    let chart = FourPillars::parse(pillars)?;
    let report = match_chart(chart);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("chart: {chart}");
    for (sinsal, positions) in &report.summary {
        let meta = info(*sinsal);
        let keys: Vec<&str> = positions.iter().map(|p| p.key()).collect();
        println!(
            "{} [{:?}] at {}: {}",
            sinsal,
            meta.polarity,
            keys.join(", "),
            meta.meaning
        );
    }
    Ok(())
}

fn run_patterns() {
    for entry in catalog().values() {
        println!(
            "{:16} {} {} [{:?}]  {}",
            entry.key, entry.korean, entry.hanja, entry.polarity, entry.meaning
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Terms { year, zone } => run_terms(year, &zone),
        Commands::Now { zone, at } => run_now(&zone, at.as_deref()),
        Commands::Chart { pillars, json } => run_chart(&pillars, json),
        Commands::Patterns => {
            run_patterns();
            Ok(())
        }
    }
}
