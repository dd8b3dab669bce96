use chainseal::{Block, Chain, ChainError};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chainseal",
    version,
    about = "Append-only tamper-evident hash chain"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a chain from JSON payloads, print it, and validate
    Build {
        /// One JSON value per block (bare words are taken as strings)
        payloads: Vec<String>,
    },
    /// Run the canonical tamper-detection scenario
    Demo,
    /// Print the digest of a block built from a payload
    Hash {
        /// JSON value (bare words are taken as strings)
        payload: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build { payloads } => cmd_build(&payloads),
        Commands::Demo => cmd_demo(),
        Commands::Hash { payload } => cmd_hash(&payload),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parse a CLI argument as JSON, falling back to a plain string.
fn parse_payload(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

fn cmd_build(payloads: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let chain = Chain::with_blocks(payloads.iter().map(|p| Block::new(parse_payload(p))));
    print!("{}", chain);
    report_validity(&chain);
    Ok(())
}

fn cmd_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut chain = Chain::with_blocks([
        Block::new(serde_json::json!({"account": "Anna", "amount": 25, "action": "buy"})),
        Block::new(serde_json::json!({"account": "Joe", "amount": 10, "action": "buy"})),
        Block::new(serde_json::json!({"account": "Katie", "amount": 20, "action": "buy"})),
        Block::new(serde_json::json!({"account": "Ethan", "amount": 4, "action": "buy"})),
    ]);
    print!("{}", chain);
    report_validity(&chain);

    println!("tampering with block #1...");
    chain.get_mut(1)?.data = serde_json::json!({"account": "Anna", "amount": 100, "action": "buy"});
    report_validity(&chain);
    Ok(())
}

fn cmd_hash(payload: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", Block::new(parse_payload(payload)).hash());
    Ok(())
}

fn report_validity(chain: &Chain) {
    match chain.validate() {
        Ok(()) => println!("Block chain is valid"),
        Err(ChainError::ChainInvalid { index }) => {
            println!("Block chain is invalid (broken at block #{})", index)
        }
        Err(e) => println!("Block chain is invalid ({})", e),
    }
}
