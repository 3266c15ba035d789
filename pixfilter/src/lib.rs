//! pixfilter
//!
//! Command-line front end for the `pixel-filter` engine. It loads one source
//! image, draws it onto a canvas and maps each requested action (grayscale,
//! brighten, threshold, reset) to one full filter cycle on that canvas.
//!
//! # Architecture
//! - `cli`: argument parsing
//! - `config`: optional TOML file with filter tunables and canvas size
//! - `logic`: action handlers for batch and interactive sessions

pub mod cli;
pub mod config;
pub mod logic;

pub use cli::Cli;

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Uses local time format for timestamps. `RUST_LOG` overrides
/// the default `info` level.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
