use anyhow::{Context, Result};
use env_logger::Builder;
use log::LevelFilter;
use solana_sdk::pubkey::Pubkey;
use std::io::Write;
use std::str::FromStr;
use vault_tx_builder::{build_vault_transactions, constants, payer};

fn print_usage(program: &str) {
    println!("Vault Transaction Builder v{}", vault_tx_builder::VERSION);
    println!("\nUsage:");
    println!("  {} [--cluster URL] [--seed BASE58] [--new-admin ADDRESS]", program);
    println!("  {} --version", program);
    println!("\nOptions:");
    println!("  --cluster, -c URL      Use the specified RPC URL (default: {})", constants::DEFAULT_RPC_URL);
    println!("  --seed BASE58          Derive the fee payer from a 32-byte base58 seed instead of generating one");
    println!("  --new-admin ADDRESS    Install the given address as vault admin (default: the fee payer)");
    println!("  --version, -v          Show version information");
}

// Simple CLI without clap
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap().as_secs(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --version command
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Vault Transaction Builder v{}", vault_tx_builder::VERSION);
        return Ok(());
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_usage(&args[0]);
        return Ok(());
    }

    // Parse optional arguments
    let mut cluster = constants::DEFAULT_RPC_URL.to_string();
    let mut seed = None;
    let mut new_admin = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--cluster" | "-c" => {
                if i + 1 < args.len() {
                    cluster = args[i + 1].clone();
                    i += 2;
                } else {
                    println!("Error: Missing value for --cluster");
                    return Ok(());
                }
            },
            "--seed" => {
                if i + 1 < args.len() {
                    seed = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    println!("Error: Missing value for --seed");
                    return Ok(());
                }
            },
            "--new-admin" => {
                if i + 1 < args.len() {
                    new_admin = Some(
                        Pubkey::from_str(&args[i + 1])
                            .context("Invalid --new-admin address")?,
                    );
                    i += 2;
                } else {
                    println!("Error: Missing value for --new-admin");
                    return Ok(());
                }
            },
            other => {
                println!("Unknown argument: {}", other);
                print_usage(&args[0]);
                return Ok(());
            }
        }
    }

    // Build the fee payer, ephemeral unless a seed was supplied
    let payer = match seed {
        Some(encoded) => payer::from_base58_seed(&encoded)
            .context("Failed to build fee payer from the supplied seed")?,
        None => payer::ephemeral(),
    };

    let built = build_vault_transactions(&cluster, &payer, new_admin)
        .await
        .context("Failed to build vault transactions")?;

    println!("Payer Address: {}", built.payer);
    println!("Vault PDA: {} Bump: {}", built.vault, built.bump);
    println!("First Tx: {}", built.reset_tx);
    println!("Second Tx: {}", built.open_tx);

    Ok(())
}
