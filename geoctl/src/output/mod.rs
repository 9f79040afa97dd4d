//! Utilities for presenting and exporting the record collection
use crate::table::GeoctlTable;
use anyhow::anyhow;
use clap::ValueEnum;
use libgeo::view::ViewModel;
use serde::Serialize;
use tabled::{Table, Tabled};

pub(crate) mod rows;

/// Data format for listing records from the collection
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    /// Human readable table of data
    Table,
    /// Comma-separated values for importing into a spreadsheet
    Csv,
    /// JSON-formatted objects
    Json,
    /// YAML-formatted objects
    Yaml,
}

/// Serialize a single object into the given data format
pub(crate) fn format_one<T>(item: T, fmt: OutputFormat) -> anyhow::Result<String>
where
    T: Tabled + Serialize + 'static,
{
    match fmt {
        OutputFormat::Table => {
            let tbuilder = Table::builder(vec![item]).index().column(0).transpose();
            Ok(format!("{}", tbuilder.build().styled()))
        }
        OutputFormat::Csv => Err(anyhow!("CSV format is not valid for single items")),
        OutputFormat::Json => serde_json::to_string(&item).map_err(|e| e.into()),
        OutputFormat::Yaml => serde_yaml::to_string(&item).map_err(|e| e.into()),
    }
}

/// Serialize a sequence of objects into the given data format
pub(crate) fn format_seq<I>(items: I, fmt: OutputFormat) -> anyhow::Result<String>
where
    I: IntoIterator,
    <I as IntoIterator>::Item: Tabled + Serialize + 'static,
{
    let iter = items.into_iter();
    match fmt {
        OutputFormat::Table => {
            let mut table = Table::new(iter);
            let n = table.count_rows() - 1;
            Ok(format!("{}\n{} records found", table.styled(), n))
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            iter.map(|item| writer.serialize(item))
                .collect::<Result<Vec<_>, _>>()?;
            writer.flush()?;
            String::from_utf8(writer.into_inner()?).map_err(|e| e.into())
        }
        OutputFormat::Json => {
            serde_json::to_string(&iter.collect::<Vec<_>>()).map_err(|e| e.into())
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&iter.collect::<Vec<_>>()).map_err(|e| e.into())
        }
    }
}

/// Render the view model as the default human-readable table, one row per
/// record with its id and available actions.
pub(crate) fn render_view(vm: &ViewModel) -> String {
    let mut builder = tabled::builder::Builder::new();
    builder.push_record([
        "Id",
        "Number",
        "Collector",
        "Locality",
        "Country",
        "Mineralogy",
        "Paleontology",
        "Latitude",
        "Longitude",
        "Actions",
    ]);
    for row in &vm.rows {
        let mut record = Vec::with_capacity(10);
        record.push(row.id.clone());
        record.extend(row.cells.iter().cloned());
        record.push(
            row.actions
                .iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(", "),
        );
        builder.push_record(record);
    }
    format!("{}\n{} records found", builder.build().styled(), vm.rows.len())
}
