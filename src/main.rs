use anyhow::Result;
use agentdesk::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
