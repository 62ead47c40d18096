//! Write a CSV comparing SWIFT fees across banks and amounts
//!
//! One row per (bank, amount, option); unpriced options leave the fee columns empty.

use anyhow::{Context, Result};
use clap::Parser;
use fee_simulator::banks::{BankStore, ClientType, Residency};
use fee_simulator::{swift_fee, SimulatorConfig, SwiftOption};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "fee_grid", about = "Compare SWIFT fees across banks as CSV")]
struct Args {
    /// JSON config file (dataset paths)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "individual")]
    client: ClientType,

    #[arg(long)]
    non_resident: bool,

    /// Amounts to price, comma separated
    #[arg(long, value_delimiter = ',', default_value = "100,500,1000,5000,10000,50000,100000")]
    amounts: Vec<f64>,

    /// Settlement speed applied to SHA pricing
    #[arg(long)]
    settlement: Option<String>,

    /// Output file; `-` writes to stdout
    #[arg(short, long, default_value = "fee_grid.csv")]
    output: String,
}

#[derive(Debug, Serialize)]
struct GridRow<'a> {
    bank: &'a str,
    residency: Residency,
    amount: f64,
    option: SwiftOption,
    sender_fee: Option<f64>,
    sender_pays_total: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let config = match &args.config {
        Some(path) => SimulatorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SimulatorConfig::bundled(),
    };
    let store = BankStore::from_config(&config).context("Failed to load bank datasets")?;
    let residency = if args.non_resident { Residency::NonResident } else { Residency::Resident };

    let writer: Box<dyn io::Write> = if args.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            std::fs::File::create(&args.output)
                .with_context(|| format!("Failed to create {}", args.output))?,
        )
    };
    let mut wtr = csv::Writer::from_writer(writer);

    let banks = store.list_banks(args.client);
    let mut rows = 0usize;
    for bank in banks {
        let schedule = bank.schedule(Some(residency));
        for &amount in &args.amounts {
            for option in SwiftOption::ALL {
                let settlement = match option {
                    SwiftOption::Sha => args.settlement.as_deref(),
                    _ => None,
                };
                let result = swift_fee(amount, &schedule, option, settlement);
                wtr.serialize(GridRow {
                    bank: &bank.name,
                    residency,
                    amount,
                    option,
                    sender_fee: result.map(|r| r.sender_fee),
                    sender_pays_total: result.map(|r| r.sender_pays_total),
                })?;
                rows += 1;
            }
        }
    }
    wtr.flush()?;

    log::info!(
        "Wrote {rows} rows for {} {} banks in {:?}",
        banks.len(),
        args.client,
        start.elapsed()
    );
    Ok(())
}
