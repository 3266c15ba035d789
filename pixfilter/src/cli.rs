use clap::{Args, Parser, Subcommand};
use pixel_filter::Action;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixfilter", version, about = "Apply simple pixel filters to an image")]
pub struct Cli {
    /// TOML file with filter settings; defaults are used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Trigger the given actions in order and save the result
    Run {
        #[command(flatten)]
        session: SessionArgs,

        /// Actions to trigger: grayscale, brighten, threshold, reset
        #[arg(value_parser = parse_action)]
        actions: Vec<Action>,
    },

    /// Read one action per line from stdin (also `save` and `quit`)
    Interactive {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// List the available actions
    Actions,
}

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Source image
    pub input: PathBuf,

    /// Where the canvas is saved
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Canvas width, defaults to the source's natural width
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height, defaults to the source's natural height
    #[arg(long)]
    pub height: Option<u32>,
}

fn parse_action(s: &str) -> Result<Action, String> {
    s.parse::<Action>().map_err(|e| e.to_string())
}
