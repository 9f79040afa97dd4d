use libgeo::sample::Sample;
use serde::Serialize;
use tabled::Tabled;

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "PascalCase")]
pub(crate) struct SampleRow {
    id: String,
    number: String,
    collector: String,
    locality: String,
    country: String,
    mineralogy: String,
    paleontology: String,
    #[tabled(display("tabled::derive::display::option", ""))]
    latitude: Option<String>,
    #[tabled(display("tabled::derive::display::option", ""))]
    longitude: Option<String>,
}

impl SampleRow {
    pub(crate) fn new(sample: &Sample) -> Self {
        Self {
            id: sample.id.clone(),
            number: sample.number.clone(),
            collector: sample.collector.clone(),
            locality: sample.locality.clone(),
            country: sample.country.clone(),
            mineralogy: sample.mineralogy.clone(),
            paleontology: sample.paleontology.clone(),
            latitude: sample.latitude.clone(),
            longitude: sample.longitude.clone(),
        }
    }
}
