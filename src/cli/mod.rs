use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the proxy server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8080")]
        port: String,
    },
    /// Start a terminal chat session against the proxy
    Chat {
        /// Agent to start with
        #[arg(long, default_value = "emailRewriter")]
        agent: String,

        /// Base URL of a running proxy
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        proxy_url: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Chat { agent, proxy_url }) => {
            chat::run(&agent, &proxy_url).await?;
        }
        None => {}
    }

    Ok(())
}
