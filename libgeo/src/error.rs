//! Objects related to reporting errors from this library

#[derive(thiserror::Error, Debug)]
pub enum Error {
    // validation errors
    #[error("required fields missing: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("latitude and longitude must be supplied together (both or neither)")]
    UnpairedCoordinates,

    // map lookup errors
    #[error("insufficient location data: need coordinates or locality and country")]
    InsufficientLocationData,

    // export errors
    #[error("no records to export")]
    NothingToExport,

    // record store errors
    #[error("no record found with id '{}'", .0)]
    RecordNotFound(String),

    #[error("couldn't access the record store")]
    StoreIo(#[from] std::io::Error),

    #[error("couldn't serialize the record collection")]
    StoreSerialization(#[source] serde_json::Error),

    #[error("couldn't format records as CSV")]
    CsvFormat(#[from] csv::Error),

    #[error("couldn't encode the map search query")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    #[error("couldn't format the export date")]
    DateFormat(#[from] time::error::Format),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
