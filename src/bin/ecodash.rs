use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ecodash::analysis::Trend;
use ecodash::controller::{Dashboard, Selection};
use ecodash::format::Formatter;
use ecodash::{Client, analysis, catalog, export, series, sparkline, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ecodash",
    version,
    about = "Fetch, analyze & export World Bank economic indicators"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one dashboard cycle and print the summary cards.
    Show(ShowArgs),
    /// Enumerate the selectable countries, metrics, or windows.
    List(ListArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Debug)]
enum ListWhat {
    Countries,
    Metrics,
    Windows,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Country code (e.g., IN or DE); see `list countries`.
    #[arg(short, long)]
    country: String,
    /// Metric id (e.g., GDP, GDPPC, POP); see `list metrics`.
    #[arg(short, long)]
    metric: String,
    /// Number of most recent reporting years to fetch.
    #[arg(short, long, default_value_t = 10)]
    window: u32,
    /// Print the year-by-year table with changes.
    #[arg(long, default_value_t = false)]
    table: bool,
    /// Write the dashboard CSV download into this directory.
    #[arg(long)]
    export: Option<PathBuf>,
    /// Save the series to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Write the series sparkline as SVG to this path.
    #[arg(long)]
    sparkline: Option<PathBuf>,
    /// Rendered height of the sparkline container (default 60).
    #[arg(long, default_value_t = 60)]
    height: u32,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Which selection set to print.
    #[arg(value_enum)]
    what: ListWhat,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Show(args) => cmd_show(args),
        Command::List(args) => cmd_list(args),
    }
}

fn cmd_show(args: ShowArgs) -> Result<()> {
    let known_country = catalog::country(&args.country);
    let known_metric = catalog::metric(&args.metric);

    // Unlisted codes pass straight through to the provider; only display
    // decoration and tidy storage need the catalog entry.
    let country_name = known_country.map(|c| c.name).unwrap_or(args.country.as_str());
    let flag = known_country.map(|c| c.flag).unwrap_or("");
    let metric_id = known_metric.map(|m| m.id).unwrap_or(args.metric.as_str());
    let metric_name = known_metric.map(|m| m.name).unwrap_or(args.metric.as_str());
    let icon = known_metric.map(|m| m.icon).unwrap_or("");

    let client = Client::default();
    let mut dash = Dashboard::new(Selection::new(args.country.as_str(), metric_id, args.window));
    let data = dash.run_cycle(&client)?;

    let formatter = Formatter::default();
    let summary = &data.summary;

    println!("{} {} | {} {}", flag, country_name, icon, metric_name);
    println!(
        "Latest Value: {} ({})",
        formatter.format(summary.latest.map(|p| p.value), metric_id),
        summary.latest.map_or("-".to_string(), |p| p.year.to_string())
    );
    println!(
        "Growth Rate:  {:+.2}% ({} {})",
        summary.growth_rate_percent,
        summary.trend.glyph(),
        summary.trend
    );
    if let Some((first, last)) = series::span(&data.series) {
        println!(
            "Data Period:  {} - {} ({} data points)",
            first,
            last,
            data.series.len()
        );
    }
    println!(
        "Last Updated: {}",
        data.last_updated.format("%Y-%m-%d %H:%M:%S")
    );

    if args.table {
        println!();
        println!("{:<6} {:>18} {:>12}", "Year", metric_name, "Change");
        for row in analysis::change_rows(&data.series) {
            let change = match row.change_percent {
                Some(c) => format!("{} {:.2}%", if c >= 0.0 { "↑" } else { "↓" }, c.abs()),
                None => "-".to_string(),
            };
            println!(
                "{:<6} {:>18} {:>12}",
                row.point.year,
                formatter.format(Some(row.point.value), metric_id),
                change
            );
        }
    }

    if let Some(dir) = args.export.as_ref() {
        let path = export::save_artifact(&data.series, country_name, metric_name, dir)?;
        eprintln!("Saved export to {}", path.display());
    }

    if let Some(path) = args.out.as_ref() {
        let (country, metric) = match (known_country, known_metric) {
            (Some(c), Some(m)) => (c, m),
            _ => anyhow::bail!("--out requires a listed country and metric (see `list`)"),
        };
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&data.series, country, metric, path)?,
            "json" => storage::save_json(&data.series, country, metric, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", data.series.len(), path.display());
    }

    if let Some(path) = args.sparkline.as_ref() {
        match sparkline::project(&data.series, args.height) {
            Ok(sp) => {
                let color = match summary.trend {
                    Trend::Up => sparkline::COLOR_RISING,
                    Trend::Down => sparkline::COLOR_FALLING,
                    Trend::Neutral => sparkline::COLOR_DEFAULT,
                };
                std::fs::write(path, sp.to_svg(color))?;
                eprintln!("Wrote sparkline to {}", path.display());
            }
            Err(marker) => eprintln!("No sparkline written: {}", marker),
        }
    }

    Ok(())
}

fn cmd_list(args: ListArgs) -> Result<()> {
    match args.what {
        ListWhat::Countries => {
            for c in catalog::COUNTRIES {
                println!("{:<4} {} {}", c.code, c.flag, c.name);
            }
        }
        ListWhat::Metrics => {
            for m in catalog::METRICS {
                println!(
                    "{:<6} {} {:<18} {:<16} {}",
                    m.id, m.icon, m.name, m.indicator, m.description
                );
            }
        }
        ListWhat::Windows => {
            for w in catalog::WINDOWS {
                println!("{}", w);
            }
        }
    }
    Ok(())
}
