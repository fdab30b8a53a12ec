//! Pizzadash CLI: print the sales report or the available filter options.
//!
//! Commands:
//! - `report`: KPIs and every aggregation table for a filter selection
//! - `options`: categories, sizes and date bounds of the dataset

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pizzadash_core::aggregate::AggregateRow;
use pizzadash_core::format;
use pizzadash_core::{
    DashboardConfig, DashboardReport, FilterOptions, FilterSpec, HourFill, Session,
};

#[derive(Parser)]
#[command(name = "pizzadash", about = "Pizza sales dashboard, terminal edition")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print KPIs and sales tables for a filter selection.
    Report {
        /// Sales CSV. Overrides `data_path` from the config file.
        #[arg(long)]
        data: Option<PathBuf>,

        /// TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// First day to include (YYYY-MM-DD). Defaults to the earliest order.
        #[arg(long)]
        start: Option<String>,

        /// Last day to include (YYYY-MM-DD). Defaults to the latest order.
        #[arg(long)]
        end: Option<String>,

        /// Category to include; repeat for several. Defaults to all.
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Size to include; repeat for several. Defaults to all.
        #[arg(long = "size")]
        sizes: Vec<String>,

        /// Print the report as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Show all 24 hours in the hourly table.
        #[arg(long, default_value_t = false)]
        zero_fill_hours: bool,

        /// Rows in the top pizzas table.
        #[arg(long)]
        top: Option<usize>,
    },
    /// Print the categories, sizes and date bounds available for filtering.
    Options {
        /// Sales CSV. Defaults to data/pizza_sales.csv.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Print the options as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            data,
            config,
            start,
            end,
            categories,
            sizes,
            json,
            zero_fill_hours,
            top,
        } => {
            let mut cfg = match config {
                Some(path) => DashboardConfig::from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => DashboardConfig::default(),
            };
            if let Some(path) = data {
                cfg.data_path = path;
            }
            if let Some(n) = top {
                cfg.top_n = n;
            }
            if zero_fill_hours {
                cfg.zero_fill_hours = true;
            }
            cfg.validate()?;

            let selection = Selection {
                start,
                end,
                categories,
                sizes,
            };
            run_report(&cfg, &selection, json)
        }
        Commands::Options { data, json } => {
            let mut cfg = DashboardConfig::default();
            if let Some(path) = data {
                cfg.data_path = path;
            }
            run_options(&cfg, json)
        }
    }
}

/// Filter flags as given on the command line.
struct Selection {
    start: Option<String>,
    end: Option<String>,
    categories: Vec<String>,
    sizes: Vec<String>,
}

fn open_session(cfg: &DashboardConfig) -> Result<Session> {
    Session::open(&cfg.data_path, cfg.report_options())
        .with_context(|| format!("cannot load sales data from {}", cfg.data_path.display()))
}

fn run_report(cfg: &DashboardConfig, selection: &Selection, json: bool) -> Result<()> {
    let session = open_session(cfg)?;
    let spec = build_spec(session.filter_options(), selection)?;
    if spec.is_inverted() {
        tracing::warn!(
            start = %spec.start,
            end = %spec.end,
            "start date is after end date, no rows match"
        );
    }
    let report = session.refresh(&spec);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&spec, &report, cfg.report_options().hour_fill);
    }
    Ok(())
}

fn run_options(cfg: &DashboardConfig, json: bool) -> Result<()> {
    let session = open_session(cfg)?;
    let options = session.filter_options();

    if json {
        println!("{}", serde_json::to_string_pretty(options)?);
        return Ok(());
    }

    println!("Data:       {}", cfg.data_path.display());
    println!("Rows:       {}", format::count(session.dataset().len() as u64));
    println!("Dates:      {} to {}", options.min_date, options.max_date);
    println!("Categories: {}", options.categories.join(", "));
    println!("Sizes:      {}", options.sizes.join(", "));
    Ok(())
}

/// Turn command-line filters into a `FilterSpec`; omitted filters select everything.
fn build_spec(options: &FilterOptions, selection: &Selection) -> Result<FilterSpec> {
    let mut spec = FilterSpec::select_all(options);

    if let Some(s) = &selection.start {
        spec.start = parse_date(s, "--start")?;
    }
    if let Some(s) = &selection.end {
        spec.end = parse_date(s, "--end")?;
    }
    if !selection.categories.is_empty() {
        spec.categories = pick(&selection.categories, &options.categories, "category")?;
    }
    if !selection.sizes.is_empty() {
        spec.sizes = pick(&selection.sizes, &options.sizes, "size")?;
    }
    Ok(spec)
}

fn parse_date(value: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("{flag} '{value}' is not a YYYY-MM-DD date"))
}

fn pick(requested: &[String], available: &[String], what: &str) -> Result<BTreeSet<String>> {
    for name in requested {
        if !available.contains(name) {
            bail!(
                "unknown {what} '{name}'. Valid: {}",
                available.join(", ")
            );
        }
    }
    Ok(requested.iter().cloned().collect())
}

fn print_report(spec: &FilterSpec, report: &DashboardReport, hour_fill: HourFill) {
    let kpis = &report.kpis;

    println!("Pizza Sales Report");
    println!("{}", "=".repeat(40));
    println!("Dates:           {} to {}", spec.start, spec.end);
    println!("Categories:      {}", join_set(&spec.categories));
    println!("Sizes:           {}", join_set(&spec.sizes));
    println!("Rows:            {}", format::count(report.record_count as u64));
    println!();
    println!("Total Revenue:   {}", format::money_whole(kpis.total_revenue));
    println!("Total Orders:    {}", format::count(kpis.total_orders as u64));
    println!("Pizzas Sold:     {}", format::count(kpis.total_pizzas_sold));
    println!("Avg Order Value: {}", format::money(kpis.avg_order_value));

    if report.is_empty() {
        println!();
        println!("No sales match the selected filters.");
        return;
    }

    print_table("Revenue by Category", &report.by_category, |k| k.clone());
    print_table("Revenue by Size", &report.by_size, |k| k.clone());
    print_table("Monthly Revenue", &report.by_month, |k| k.clone());
    let hourly_title = match hour_fill {
        HourFill::Sparse => "Sales by Hour",
        HourFill::ZeroFill => "Sales by Hour (all hours)",
    };
    print_table(hourly_title, &report.by_hour, |h| format!("{h:02}:00"));
    print_table(
        &format!("Top {} Pizzas", report.top_pizzas.len()),
        &report.top_pizzas,
        |k| k.clone(),
    );
    print_table("Sales by Weekday", &report.by_weekday, |k| k.clone());
}

fn print_table<K>(title: &str, rows: &[AggregateRow<K>], key: impl Fn(&K) -> String) {
    let labels: Vec<String> = rows.iter().map(|r| key(&r.key)).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0).max(8);

    println!();
    println!("{title}");
    println!("{}", "-".repeat(width + 16));
    for (label, row) in labels.iter().zip(rows) {
        println!("{label:<width$} {:>15}", format::money(row.total));
    }
}

fn join_set(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        "(none)".to_string()
    } else {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
