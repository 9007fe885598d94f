use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relayctl")]
#[command(about = "Management CLI for the relay router admin API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:18551")]
    url: String,

    /// Bearer token, if the admin API requires one
    #[arg(short, long, env = "RELAY_ROUTER_API_KEY")]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the installed registry generation and size
    Status,
    /// List every relay of the installed registry
    Relays,
    /// List the relays used for one proposer
    Validator {
        /// Proposer BLS public key
        pubkey: String,
    },
    /// Sync relay config now
    Sync,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(key) = &cli.key {
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {key}"))?);
    }

    let base = cli.url.trim_end_matches('/');
    let request = match &cli.command {
        Commands::Status => client.get(format!("{base}/status")),
        Commands::Relays => client.get(format!("{base}/relays")),
        Commands::Validator { pubkey } => client.get(format!("{base}/relays/{pubkey}")),
        Commands::Sync => client.post(format!("{base}/sync")),
    };

    let res = request.headers(headers).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{text}"),
    }

    if !status.is_success() {
        return Err(format!("admin API returned status {status}").into());
    }
    Ok(())
}
