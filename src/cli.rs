use crate::config::{SortDirection, load_config};
use crate::layout::compute_timeline_layout;
use crate::record::TimelineRecord;
use crate::validate::validate_records;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "chrg", version, about = "Campaign timeline layout engine")]
pub struct Args {
    /// Input records JSON file, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output layout JSON file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (layout tunables and era table)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Container width in pixels
    #[arg(short = 'w', long = "width", default_value_t = 1200.0)]
    pub width: f64,

    /// Zoom factor, clamped to the configured bounds
    #[arg(short = 'z', long = "zoom", default_value_t = 1.0)]
    pub zoom: f64,

    /// Chronological iteration order
    #[arg(short = 's', long = "sort", value_enum, default_value = "asc")]
    pub sort: SortOrder,

    /// Validate records and emit a report instead of a layout
    #[arg(long = "validate")]
    pub validate: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Asc,
            SortOrder::Desc => SortDirection::Desc,
        }
    }
}

pub fn run() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    config.layout.container_width = args.width;
    let zoom = config.layout.zoom.clamp(args.zoom);

    let input = read_input(args.input.as_deref())?;
    let records: Vec<TimelineRecord> =
        serde_json::from_str(&input).context("records input is not valid JSON")?;

    let json = if args.validate {
        let report = validate_records(&records);
        serde_json::to_string_pretty(&report)?
    } else {
        let layout =
            compute_timeline_layout(&records, &config.eras, &config.layout, zoom, args.sort.into());
        serde_json::to_string_pretty(&layout)?
    };

    write_output(&json, args.output.as_deref())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
