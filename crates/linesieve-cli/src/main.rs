//! linesieve - keep or drop lines of text by asking an LLM a yes/no question.

use clap::Parser;
use linesieve_cli::{logging, Cli, Config, RunSettings};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> linesieve_cli::Result<()> {
    // Load config file (defaults when the default file is absent)
    let config = Config::load(cli.config.as_deref())?;

    // Resolve everything fatal before the first line is read
    let settings = RunSettings::resolve(cli, config)?;

    linesieve_cli::execute(settings).await?;

    Ok(())
}
