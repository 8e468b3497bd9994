use anyhow::Result;
use clap::Parser;
use desk_admin_backend::cli::Cli;
use desk_admin_backend::server;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    server::run_with_config(cli.server_config()).await
}
