use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, help = "Path to the record collection file")]
    pub datafile: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "List all samples in the collection")]
    List {
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
    #[command(about = "Show all details about a single sample")]
    Show {
        id: String,
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
    #[command(about = "Add a new sample to the collection")]
    Add {
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        collector: Option<String>,
        #[arg(long)]
        locality: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        mineralogy: Option<String>,
        #[arg(long)]
        paleontology: Option<String>,
        #[arg(long = "lat")]
        latitude: Option<String>,
        #[arg(long = "long")]
        longitude: Option<String>,
    },
    #[command(about = "Modify properties of a sample")]
    Modify {
        #[arg(long)]
        id: String,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        collector: Option<String>,
        #[arg(long)]
        locality: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        mineralogy: Option<String>,
        #[arg(long)]
        paleontology: Option<String>,
        #[arg(long = "lat")]
        latitude: Option<String>,
        #[arg(long = "long")]
        longitude: Option<String>,
    },
    #[command(about = "Remove an existing sample from the collection")]
    Remove { id: String },
    #[command(about = "Remove ALL samples from the collection")]
    Clear,
    #[command(about = "Export the collection to a CSV file")]
    Export {
        #[arg(short, long, help = "Destination file (default: dated filename)")]
        file: Option<PathBuf>,
    },
    #[command(about = "Print a map-search URL for a sample's location")]
    Map { id: String },
    #[command(about = "Print a map-search URL for a pair of coordinates")]
    Lookup {
        #[arg(long = "lat")]
        latitude: String,
        #[arg(long = "long")]
        longitude: String,
    },
}
