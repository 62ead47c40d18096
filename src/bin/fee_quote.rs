//! Quote SEPA and SWIFT costs for one transfer
//!
//! Prints the SEPA fee and the SHA/OUR/BEN sender costs for the selected bank,
//! either as text or JSON.

use anyhow::{Context, Result};
use clap::Parser;
use fee_simulator::banks::{ClientType, Residency};
use fee_simulator::fees::{SepaChannel, SettlementChoice};
use fee_simulator::{parse_amount, FeeResult, QuoteRequest, Simulator, SimulatorConfig, SwiftOption};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fee_quote", about = "Estimate SEPA and SWIFT transfer costs")]
struct Args {
    /// JSON config file (dataset paths, SEPA tariff)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dataset for individual clients, overrides the config
    #[arg(long)]
    individual: Option<PathBuf>,

    /// Dataset for business clients, overrides the config
    #[arg(long)]
    business: Option<PathBuf>,

    /// Amount in EUR; `,` is accepted as decimal separator
    #[arg(short, long, default_value = "250")]
    amount: String,

    #[arg(long, default_value = "individual")]
    client: ClientType,

    #[arg(long)]
    non_resident: bool,

    /// Bank name; defaults to the first bank of the dataset
    #[arg(long)]
    bank: Option<String>,

    #[arg(long, default_value = "digital")]
    channel: SepaChannel,

    /// Not the first transfer of the day (disables the SEPA promotion)
    #[arg(long)]
    not_first_of_day: bool,

    /// SHA settlement choice, e.g. Standard or T+0
    #[arg(long)]
    settlement: Option<SettlementChoice>,

    /// List banks for the client type and exit
    #[arg(long)]
    list_banks: bool,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulatorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SimulatorConfig::bundled(),
    };
    if let Some(path) = &args.individual {
        config = config.with_dataset(ClientType::Individual, path);
    }
    if let Some(path) = &args.business {
        config = config.with_dataset(ClientType::Business, path);
    }

    let simulator = Simulator::from_config(&config).context("Failed to load bank datasets")?;

    if args.list_banks {
        for bank in simulator.store().list_banks(args.client) {
            println!("{}", bank.name);
        }
        return Ok(());
    }

    let request = QuoteRequest {
        amount: parse_amount(&args.amount),
        client_type: args.client,
        residency: if args.non_resident { Residency::NonResident } else { Residency::Resident },
        bank: args.bank.clone(),
        channel: args.channel,
        first_of_day: !args.not_first_of_day,
        settlement: args.settlement.clone(),
    };
    let quote = simulator.quote(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!(
        "Bank: {} ({}, {})",
        quote.bank.as_deref().unwrap_or("-"),
        request.client_type,
        if args.non_resident { "non-resident" } else { "resident" }
    );
    println!("Amount: {:.2} EUR", quote.amount);
    println!();
    println!("{:<10} {:>12} {:>14}", "Transfer", "Fee", "Sender pays");
    println!("{:<10} {:>12.2} {:>14.2}", "SEPA", quote.sepa.fee, quote.sepa.total);
    for option in SwiftOption::ALL {
        print_swift_line(option, quote.swift(option));
    }

    if !quote.settlement_options.is_empty() {
        let offered: Vec<String> = quote.settlement_options.iter().map(ToString::to_string).collect();
        println!();
        println!(
            "SHA settlement: {} (offered: {})",
            quote.settlement.as_ref().map(ToString::to_string).unwrap_or_default(),
            offered.join(", ")
        );
    }

    Ok(())
}

fn print_swift_line(option: SwiftOption, result: Option<FeeResult>) {
    let label = format!("SWIFT {option}");
    match result {
        Some(r) => println!("{:<10} {:>12.2} {:>14.2}", label, r.sender_fee, r.sender_pays_total),
        None => println!("{label:<10} {:>12}", "no pricing published"),
    }
}
