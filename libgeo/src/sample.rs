use crate::{Result, empty_string_as_none, maplink, none_as_empty_string};
use serde::{Deserialize, Serialize};

/// A single geological field sample record.
///
/// The serialized field names match the record format of existing
/// collection files, so a prior data file loads without migration.
/// Coordinates are kept as the operator typed them (they may carry degree
/// markers or hemisphere letters); [maplink] is responsible for turning them
/// into decimals when a map lookup is requested.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Sample {
    pub id: String,
    #[serde(rename = "numeroMuestra")]
    pub number: String,
    #[serde(rename = "coleccionista")]
    pub collector: String,
    #[serde(rename = "localidad")]
    pub locality: String,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "mineralogia")]
    pub mineralogy: String,
    #[serde(rename = "paleontologia")]
    pub paleontology: String,
    #[serde(
        rename = "latitud",
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub latitude: Option<String>,
    #[serde(
        rename = "longitud",
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub longitude: Option<String>,
}

impl Sample {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        number: String,
        collector: String,
        locality: String,
        country: String,
        mineralogy: String,
        paleontology: String,
        latitude: Option<String>,
        longitude: Option<String>,
    ) -> Self {
        Self {
            id,
            number,
            collector,
            locality,
            country,
            mineralogy,
            paleontology,
            latitude,
            longitude,
        }
    }

    /// Build a map-search URL for this record, preferring stored
    /// coordinates and falling back to locality/country.
    pub fn map_search_url(&self) -> Result<String> {
        maplink::build(
            self.latitude.as_deref().unwrap_or(""),
            self.longitude.as_deref().unwrap_or(""),
            &self.locality,
            &self.country,
        )
    }
}
