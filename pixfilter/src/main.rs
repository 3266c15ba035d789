use clap::Parser;
use pixfilter::{Cli, config::Config, logic};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    pixfilter::init_logger();
    log::debug!("start...");

    let config = Config::load(cli.config.as_deref())?;
    logic::run(&cli.command, &config)?;

    log::debug!("exit...");
    Ok(())
}
