//! HBD CLI - summaries, reports and JSON exports of hotel booking data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hbd-cli",
    version,
    about = "Hotel booking dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hbd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[HBD] cli: starting");
    hbd_cmd::run(cli.command)
}
