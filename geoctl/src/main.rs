//! This is a command-line tool to keep records of geological field samples
//! via [libgeo]
use crate::{cli::*, context::AppContext};
use anyhow::{Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

mod cli;
mod commands;
mod context;
mod output;
mod prompt;
mod table;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Cli::parse();
    let datafile = match args.datafile {
        Some(path) => path,
        None => default_datafile()?,
    };
    debug!(?datafile, "using record collection");
    let ctx = AppContext::new(datafile);

    match args.command {
        Commands::Map { id } => commands::map::show_record(&id, &ctx).await,
        Commands::Lookup {
            latitude,
            longitude,
        } => commands::map::lookup(&latitude, &longitude),
        command => commands::samples::handle_command(command, &ctx).await,
    }
}

fn default_datafile() -> Result<PathBuf> {
    directories::ProjectDirs::from("org", "geocollect", "geoctl")
        .map(|dirs| dirs.data_dir().join("muestras_geologicas.json"))
        .ok_or_else(|| anyhow!("couldn't determine a data directory for the record collection"))
}
