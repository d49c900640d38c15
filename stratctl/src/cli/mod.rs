mod axes;
mod blink;
mod events;
mod led;
mod led_demo;
mod probe;

use std::path::PathBuf;

use anyhow::{Context, Result};
use axes::AxesCommand;
use blink::BlinkCommand;
use clap::{ArgAction, Parser, Subcommand};
use events::EventsCommand;
use hidapi::HidApi;
use led::LedCommand;
use led_demo::LedDemoCommand;
use probe::ProbeCommand;
use stratcom::device::Device;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    hid::{self, HidChannel},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(subcommand)]
    command: Commands,

    /// Output plain JSON without color and interactivity
    #[arg(short, long, global = true)]
    json: bool,

    /// Read settings from a TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Open the device at this HID path instead of looking it up by ID
    #[arg(short, long, global = true, value_name = "HID_PATH")]
    path: Option<String>,

    /// Log more details to stderr (can be repeated)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    Probe(ProbeCommand),
    Events(EventsCommand),
    Axes(AxesCommand),
    Led(LedCommand),
    LedDemo(LedDemoCommand),
    Blink(BlinkCommand),
}

/// Everything a command needs to reach the device.
struct Env<'a> {
    cli: &'a Cli,
    config: Config,
    api: HidApi,
}

impl Env<'_> {
    /// Opens the selected device and starts a session on it.
    fn open_device(&self) -> Result<Device<HidChannel>> {
        let chan = hid::open(&self.api, &self.config.device, self.cli.path.as_deref())?;
        Ok(Device::new(chan))
    }
}

pub fn execute() -> Result<()> {
    let cli = Cli::parse();

    cli.color.write_global();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let api = HidApi::new().context("could not initialize the HID library")?;
    let env = Env {
        cli: &cli,
        config,
        api,
    };

    match &cli.command {
        Commands::Probe(cmd) => cmd.execute(&env),
        Commands::Events(cmd) => cmd.execute(&env),
        Commands::Axes(cmd) => cmd.execute(&env),
        Commands::Led(cmd) => cmd.execute(&env),
        Commands::LedDemo(cmd) => cmd.execute(&env),
        Commands::Blink(cmd) => cmd.execute(&env),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_options_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "stratctl", "events", "--json", "--path", "/dev/hidraw3", "-vv",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.path.as_deref(), Some("/dev/hidraw3"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Events(_)));
    }
}
