//! Sales CLI - inspect the dashboard's chart data from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sales-cli",
    version,
    about = "Sales dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sales_cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sales_cmd::run(cli.command).await
}
