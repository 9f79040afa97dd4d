//! Builds external map-search URLs from a record's location data.
//!
//! Coordinates win over place names: if both coordinate strings parse as
//! decimal degrees the query is `<lat>,<lon>`; otherwise a non-empty
//! locality/country pair becomes a place search; otherwise there is nothing
//! to look up and the builder reports an error instead of guessing.

use crate::{Error, Result};

const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Parse a raw coordinate string as decimal degrees.
///
/// Operators paste coordinates with degree markers, hemisphere letters, or
/// stray whitespace, so everything other than ASCII digits, `.`, and a
/// leading `-` is stripped before parsing. Returns `None` when the cleaned
/// string is not a complete decimal number.
pub fn decimal_coordinate(raw: &str) -> Option<f64> {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '0'..='9' | '.' => cleaned.push(c),
            '-' if cleaned.is_empty() => cleaned.push(c),
            _ => (),
        }
    }
    cleaned.parse::<f64>().ok()
}

/// Build a map-search URL from candidate coordinate and place strings.
pub fn build(latitude: &str, longitude: &str, locality: &str, country: &str) -> Result<String> {
    if let (Some(lat), Some(lon)) = (decimal_coordinate(latitude), decimal_coordinate(longitude)) {
        return Ok(format!("{MAP_SEARCH_BASE}?api=1&query={lat},{lon}"));
    }

    if !locality.trim().is_empty() && !country.trim().is_empty() {
        let query = serde_urlencoded::to_string([("query", format!("{locality}, {country}"))])?;
        return Ok(format!("{MAP_SEARCH_BASE}?api=1&{query}"));
    }

    Err(Error::InsufficientLocationData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn parses_plain_decimal_coordinates() {
        assert_eq!(decimal_coordinate("40.7128"), Some(40.7128));
        assert_eq!(decimal_coordinate("-74.0060"), Some(-74.006));
    }

    #[test]
    fn strips_markup_from_coordinates() {
        assert_eq!(decimal_coordinate("40.7128° N"), Some(40.7128));
        assert_eq!(decimal_coordinate(" -74.0060 "), Some(-74.006));
    }

    #[test]
    fn rejects_unparseable_coordinates() {
        assert_eq!(decimal_coordinate(""), None);
        assert_eq!(decimal_coordinate("unknown"), None);
        assert_eq!(decimal_coordinate("40.7.1"), None);
    }

    #[test]
    fn coordinates_win_over_place() {
        let url = build("40.7128", "-74.0060", "Cusco", "Peru").expect("failed to build url");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=40.7128,-74.006"
        );
    }

    #[test]
    fn numeric_formatting_drops_trailing_zero() {
        let url = build("40.7128", "-74.0060", "", "").expect("failed to build url");
        assert!(url.contains("query=40.7128,-74.006"));
        assert!(!url.contains("-74.0060"));
    }

    #[test]
    fn place_fallback_is_form_encoded() {
        let url = build("", "", "Cusco", "Peru").expect("failed to build url");
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=Cusco%2C+Peru"
        );
    }

    #[test]
    fn one_coordinate_falls_back_to_place() {
        let url = build("40.7128", "", "Cusco", "Peru").expect("failed to build url");
        assert!(url.contains("Cusco"));
    }

    #[test]
    fn no_location_data_is_an_error() {
        assert!(matches!(
            build("", "", "", ""),
            Err(Error::InsufficientLocationData)
        ));
    }

    #[test]
    fn one_coordinate_without_place_is_an_error() {
        // the standalone lookup path passes empty place strings, so a lone
        // coordinate must not silently turn into a place search
        assert!(matches!(
            build("40.7128", "", "", ""),
            Err(Error::InsufficientLocationData)
        ));
    }
}
