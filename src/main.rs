//! Bedwars Stats - Entry Point
//!
//! Reads a Hypixel `/player` document from a file or stdin, runs the stats
//! and leveling engines over it, and prints the response envelope as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bedwars_stats::data::{data_directory, export_default_data, DataManager};
use bedwars_stats::progression::prestige_name;
use bedwars_stats::report::{build_report, Envelope, ErrorBody, PlayerPayload};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "bedwars-stats", version, about = "Bedwars stats and prestige levels from a player document")]
struct Args {
    /// Player document JSON (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Player UUID echoed in the response (dashes are stripped)
    #[arg(long, default_value = "")]
    uuid: String,

    /// Directory holding gamemodes.ron and leveling.ron
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Write the default data files into the data directory and exit
    #[arg(long)]
    export_defaults: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // stdout carries the JSON response, logs go to stderr
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(data_directory);

    if args.export_defaults {
        export_default_data(&data_dir)
            .with_context(|| format!("exporting default data to {:?}", data_dir))?;
        return Ok(());
    }

    let data = DataManager::load_from(&data_dir);
    let document = read_input(args.input.as_ref())?;

    let payload = match PlayerPayload::parse(&document) {
        Ok(payload) => payload,
        Err(e) => {
            log::error!("Could not read player document: {}", e);
            print_json(&ErrorBody::from(&e), args.pretty)?;
            return Err(e.into());
        }
    };

    let report = build_report(&args.uuid, payload, data.schema(), data.curve());
    log::info!(
        "{} is level {} ({} prestige)",
        report.username,
        report.level.trunc(),
        prestige_name(report.prestige)
    );

    print_json(&Envelope::ok(&report), args.pretty)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("reading {:?}", path))
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
