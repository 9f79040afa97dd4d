//! CSV export of the full record collection.
//!
//! The output format matches the collection's historical export files:
//! a plain Spanish header row followed by one fully-quoted row per record,
//! offered under a `datos_geologicos_<date>.csv` filename.

use crate::{Error, Result, sample::Sample};
use csv::{QuoteStyle, WriterBuilder};
use time::{Date, macros::format_description};

/// Header row of the export file, in collection order.
pub const CSV_HEADERS: [&str; 9] = [
    "ID",
    "Número de muestra",
    "Coleccionista",
    "Localidad",
    "País",
    "Mineralogía",
    "Paleontología",
    "Latitud",
    "Longitud",
];

/// Serialize the collection to CSV. Every field is double-quote-wrapped
/// with embedded quotes doubled; the header row is written unquoted.
pub fn to_csv(samples: &[Sample]) -> Result<String> {
    if samples.is_empty() {
        return Err(Error::NothingToExport);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .has_headers(false)
        .from_writer(vec![]);
    for sample in samples {
        writer.write_record([
            sample.id.as_str(),
            sample.number.as_str(),
            sample.collector.as_str(),
            sample.locality.as_str(),
            sample.country.as_str(),
            sample.mineralogy.as_str(),
            sample.paleontology.as_str(),
            sample.latitude.as_deref().unwrap_or(""),
            sample.longitude.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    let rows = String::from_utf8(writer.into_inner().map_err(|e| e.into_error())?)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(format!("{}\n{}", CSV_HEADERS.join(","), rows))
}

/// Default export filename for the given calendar date.
pub fn default_filename(date: Date) -> Result<String> {
    let formatted = date.format(format_description!("[year]-[month]-[day]"))?;
    Ok(format!("datos_geologicos_{formatted}.csv"))
}
