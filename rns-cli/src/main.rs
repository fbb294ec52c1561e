//! RNS Gateway CLI
//!
//! Runs the gateway server and exposes its resolution steps as commands.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rns_api::{ApiConfig, ApiServer};
use rns_core::multihash::{from_base58, to_hex};
use rns_core::namehash::{namehash, validate_gateway_name};
use rns_ipfs::GatewayClient;
use rns_resolver::RnsClient;

/// RNS Gateway - serve IPFS content for .ron names
#[derive(Parser)]
#[command(name = "rns-gateway")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the gateway server
    Serve {
        /// Port to listen on (defaults to 3000)
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
        /// Bind address (IPv4 or IPv6)
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: IpAddr,
    },

    /// Resolve a .ron name to its content identifier
    Resolve {
        /// Name to resolve
        name: String,
        /// RPC base URL
        #[arg(long, env = "RPC_URL")]
        rpc_url: Option<String>,
        /// RPC API key
        #[arg(long, env = "API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Print the namehash of a name
    Namehash {
        /// Name to hash
        name: String,
    },

    /// Print the hex form of a Base58 multihash
    Multihash {
        /// Base58 multihash (e.g. a CIDv0)
        hash: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "rns_api=debug,rns_resolver=debug,rns_ipfs=debug,tower_http=debug,info"
    } else {
        "rns_api=info,rns_resolver=info,rns_ipfs=info,tower_http=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(cli.json.then(|| fmt::layer().json()))
        .with((!cli.json).then(|| fmt::layer()))
        .init();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, bind).await,
        Commands::Resolve {
            name,
            rpc_url,
            api_key,
        } => cmd_resolve(&name, rpc_url, api_key).await,
        Commands::Namehash { name } => cmd_namehash(&name),
        Commands::Multihash { hash } => cmd_multihash(&hash),
    }
}

/// Run the gateway server
async fn cmd_serve(port: Option<u16>, bind: IpAddr) -> Result<()> {
    let mut config = ApiConfig::from_env().context("Invalid configuration")?;
    if let Some(port) = port {
        config.port = port;
    }

    let addr = SocketAddr::new(bind, config.port);

    println!("{}", "🚀 Starting RNS gateway...".cyan().bold());
    println!("   {} http://{}", "Listening on:".green(), addr);
    println!("   {} http://{}/health", "Health check:".dimmed(), addr);
    println!("   {} {}", "IPFS gateway:".dimmed(), config.gateway_url);
    println!("\n   Press Ctrl+C to stop.\n");

    let server = ApiServer::connect(config)
        .await
        .context("Failed to connect to the RPC node")?;

    server.run(addr).await?;

    Ok(())
}

/// Resolve a name to its content identifier
async fn cmd_resolve(name: &str, rpc_url: Option<String>, api_key: Option<String>) -> Result<()> {
    println!("{} {}", "🔍 Resolving:".cyan().bold(), name);

    let mut config = ApiConfig::from_env().context("Invalid configuration")?;
    if let Some(url) = rpc_url {
        config.rpc_url = url;
    }
    if let Some(key) = api_key {
        config.api_key = key;
    }

    let name = validate_gateway_name(name)?;
    let resolver = RnsClient::with_config(config.rns_config())?;
    let gateway = GatewayClient::with_config(config.gateway_config())?;

    let content_id = resolver
        .resolve(&name)
        .await
        .context("Failed to resolve name")?;

    println!("\n{}", "✅ Resolved:".green().bold());
    println!("   {} {}", "Namehash:".dimmed(), namehash(&name)?);
    println!("   {} {}", "Content ID:".dimmed(), content_id);
    println!("   {} {}", "Gateway URL:".dimmed(), gateway.content_url(&content_id));

    Ok(())
}

/// Print a namehash
fn cmd_namehash(name: &str) -> Result<()> {
    let node = namehash(name).context("Invalid name")?;
    println!("{}", node.to_hex());
    Ok(())
}

/// Print a multihash as hex
fn cmd_multihash(hash: &str) -> Result<()> {
    let multihash = from_base58(hash).context("Invalid multihash")?;
    println!("{}", to_hex(&multihash));
    Ok(())
}
