use anyhow::Result;

mod cli;
mod config;
mod hid;

fn main() -> Result<()> {
    cli::execute()
}
