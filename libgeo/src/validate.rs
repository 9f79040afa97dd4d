//! Cross-field validation for sample records.
//!
//! One rule set shared by the add and modify paths. Validation always runs
//! before any store mutation so a failure leaves the collection untouched.

use crate::{Error, Result, sample::Sample};

/// Check the required-field rule and the paired-coordinate rule.
///
/// The six descriptive fields must be non-empty after trimming. Latitude
/// and longitude are optional but must be supplied together; a record with
/// exactly one of them is rejected.
pub fn check(sample: &Sample) -> Result<()> {
    let required = [
        ("number", &sample.number),
        ("collector", &sample.collector),
        ("locality", &sample.locality),
        ("country", &sample.country),
        ("mineralogy", &sample.mineralogy),
        ("paleontology", &sample.paleontology),
    ];
    let missing: Vec<String> = required
        .iter()
        .filter(|(_, val)| val.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingRequiredFields(missing));
    }

    match (present(&sample.latitude), present(&sample.longitude)) {
        (true, false) | (false, true) => Err(Error::UnpairedCoordinates),
        _ => Ok(()),
    }
}

fn present(val: &Option<String>) -> bool {
    val.as_deref().is_some_and(|s| !s.trim().is_empty())
}
