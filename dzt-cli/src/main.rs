use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dzt_core::{read_dzt, DataLayout, DecodeOptions, ScanCount};
use dzt_types::{HeaderRecord, PackedDateTime, SampleMatrix};
use log::{error, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "dzt-info",
    version = env!("CARGO_PKG_VERSION"),
    about = "Decode a GSSI .DZT radar file and print its header and data shape",
    long_about = None,
)]
struct Cli {
    /// Путь к .DZT файлу
    file: PathBuf,
    /// Первый скан (с нуля)
    #[arg(long, default_value = "0")]
    start_scan: i64,
    /// Количество сканов (-1 = до конца файла)
    #[arg(long, default_value = "-1", allow_negative_numbers = true)]
    scans: i64,
    /// Вместо ошибки диапазона читать с начала данных / до конца файла
    #[arg(long)]
    lenient: bool,
    /// Вывести заголовок в JSON (stdout)
    #[arg(long)]
    json: bool,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_secs()
        .init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let opts = DecodeOptions::from_raw(cli.start_scan, cli.scans)
        .context("--start-scan")?
        .with_lenient_range(cli.lenient);

    let (matrix, header) = read_dzt(&cli.file, &opts)
        .with_context(|| format!("failed to decode {:?}", cli.file))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&header)?);
        return Ok(());
    }

    let layout = DataLayout::from_header(&header)?;

    print_header(&header);
    print_summary(cli, &opts, &layout, &matrix);

    Ok(())
}

fn print_header(header: &HeaderRecord) {
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (name, value) in header.iter() {
        info!("  {name:<18}: {value}");
    }
    info!("  {:<18}: {}", "created", describe_time(header.creation_time().ok()));
    info!("  {:<18}: {}", "modified", describe_time(header.modified_time().ok()));
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

fn print_summary(
    cli: &Cli,
    opts: &DecodeOptions,
    layout: &DataLayout,
    matrix: &SampleMatrix,
) {
    let window = match opts.n_scans {
        ScanCount::All => format!("{}..end", opts.start_scan),
        ScanCount::Scans(n) => format!("{}..{}", opts.start_scan, opts.start_scan.saturating_add(n)),
    };

    info!("  Input         : {:?}", cli.file);
    info!("  Data offset   : {} bytes", layout.head_offset);
    info!("  Sample width  : {} ({} bits)", layout.width, layout.width.bits());
    info!("  Channels      : {}", layout.num_channels);
    info!("  Scan window   : {window}");
    info!("  Matrix        : {} rows x {} scans", matrix.rows(), matrix.cols());

    if matrix.is_empty() {
        warn!("No complete scans in the requested window");
    }

    info!("✓ Decode complete");
}

fn describe_time(t: Option<PackedDateTime>) -> String {
    match t {
        Some(t) if !t.is_unset() => t.to_string(),
        _ => "-".to_string(),
    }
}
