use anyhow::Result;
use clap::Parser;

use pons_cli::cli::Args;
use pons_cli::cli::commands::interactive::{self, InteractiveOptions};
use pons_cli::{logging, output};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init();
    output::init(output::OutputConfig {
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    interactive::run_interactive(InteractiveOptions { dict: args.dict }).await
}
