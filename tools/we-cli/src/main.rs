use clap::Parser;

use we_cli::cli::{Cli, Command};
use we_cli::{commands, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    logging::init(cli.verbose)?;

    let output = match &cli.command {
        Command::Set(args) => commands::set(cli, args).await?,
        Command::Get(args) => commands::get(cli, args).await?,
    };
    println!("{}", output);
    Ok(())
}
