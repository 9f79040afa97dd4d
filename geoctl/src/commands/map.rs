//! Handlers for map lookups: per-record and standalone coordinates.
use crate::context::AppContext;
use anyhow::Result;
use libgeo::{Error, maplink};

pub(crate) async fn show_record(id: &str, ctx: &AppContext) -> Result<()> {
    let sample = match ctx.store.get(id).await {
        Ok(sample) => sample,
        Err(Error::RecordNotFound(_)) => {
            println!("Sample {id} not found");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    print_url(sample.map_search_url())
}

/// Standalone coordinate lookup: place fields are passed empty, so a lone
/// coordinate is an error rather than a fallback place search.
pub(crate) fn lookup(latitude: &str, longitude: &str) -> Result<()> {
    print_url(maplink::build(latitude, longitude, "", ""))
}

fn print_url(url: libgeo::Result<String>) -> Result<()> {
    match url {
        Ok(url) => {
            println!("{url}");
            Ok(())
        }
        Err(e @ Error::InsufficientLocationData) => {
            println!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
