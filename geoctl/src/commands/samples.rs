//! Handlers for the record-keeping commands: list, show, add, modify,
//! remove, clear, and export.
use crate::{
    cli::Commands,
    context::AppContext,
    output::{self, OutputFormat, rows::SampleRow},
    prompt,
};
use anyhow::{Result, anyhow};
use libgeo::{Error, export, sample::Sample, validate, view};
use std::path::PathBuf;
use time::OffsetDateTime;
use tokio::fs;

/// Treat empty or whitespace-only input as an absent optional field.
fn nonempty(val: Option<String>) -> Option<String> {
    val.filter(|s| !s.trim().is_empty())
}

pub(crate) async fn handle_command(command: Commands, ctx: &AppContext) -> Result<()> {
    match command {
        // handled by the map module
        Commands::Map { .. } | Commands::Lookup { .. } => Ok(()),
        Commands::List { output } => {
            let samples = ctx.store.load_all().await?;
            let vm = view::render(&samples);
            if !vm.table_visible {
                println!("{}", view::EMPTY_MESSAGE);
                return Ok(());
            }
            let str = match output {
                OutputFormat::Table => output::render_view(&vm),
                fmt => output::format_seq(samples.iter().map(SampleRow::new), fmt)?,
            };
            println!("{str}");
            Ok(())
        }
        Commands::Show { id, output } => match ctx.store.get(&id).await {
            Ok(sample) => {
                let str = output::format_one(SampleRow::new(&sample), output)?;
                println!("{str}");
                Ok(())
            }
            Err(Error::RecordNotFound(_)) => {
                println!("Sample {id} not found");
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
        Commands::Add {
            number,
            collector,
            locality,
            country,
            mineralogy,
            paleontology,
            latitude,
            longitude,
        } => {
            let sample = if number.is_none()
                && collector.is_none()
                && locality.is_none()
                && country.is_none()
                && mineralogy.is_none()
                && paleontology.is_none()
                && latitude.is_none()
                && longitude.is_none()
            {
                let number = prompt::required_text("Sample number:")?;
                let collector = prompt::required_text("Collector:")?;
                let locality = prompt::required_text("Locality:")?;
                let country = prompt::required_text("Country:")?;
                let mineralogy = prompt::required_text("Mineralogy:")?;
                let paleontology = prompt::required_text("Paleontology:")?;
                let latitude = prompt::optional_text("Latitude (leave empty to skip):")?;
                let longitude = prompt::optional_text("Longitude (leave empty to skip):")?;

                if !ctx.confirm.confirm("Save to collection?")? {
                    return Err(anyhow!("Aborted"));
                }

                Sample::new(
                    ctx.ids.generate(),
                    number,
                    collector,
                    locality,
                    country,
                    mineralogy,
                    paleontology,
                    latitude,
                    longitude,
                )
            } else {
                // missing required flags become empty fields so that the
                // validation rules report them all at once
                Sample::new(
                    ctx.ids.generate(),
                    number.unwrap_or_default(),
                    collector.unwrap_or_default(),
                    locality.unwrap_or_default(),
                    country.unwrap_or_default(),
                    mineralogy.unwrap_or_default(),
                    paleontology.unwrap_or_default(),
                    nonempty(latitude),
                    nonempty(longitude),
                )
            };
            validate::check(&sample)?;
            let id = sample.id.clone();
            ctx.store.add(sample).await?;
            println!("Added sample {id} to the collection");
            Ok(())
        }
        Commands::Modify {
            id,
            number,
            collector,
            locality,
            country,
            mineralogy,
            paleontology,
            latitude,
            longitude,
        } => {
            let oldsample = match ctx.store.get(&id).await {
                Ok(sample) => sample,
                Err(Error::RecordNotFound(_)) => {
                    println!("Sample {id} not found");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            let mut sample = oldsample.clone();
            if number.is_none()
                && collector.is_none()
                && locality.is_none()
                && country.is_none()
                && mineralogy.is_none()
                && paleontology.is_none()
                && latitude.is_none()
                && longitude.is_none()
            {
                println!("Interactively modifying sample {id}. Edit each value as needed.");
                sample.number = prompt::prefilled_text("Sample number:", &sample.number)?;
                sample.collector = prompt::prefilled_text("Collector:", &sample.collector)?;
                sample.locality = prompt::prefilled_text("Locality:", &sample.locality)?;
                sample.country = prompt::prefilled_text("Country:", &sample.country)?;
                sample.mineralogy = prompt::prefilled_text("Mineralogy:", &sample.mineralogy)?;
                sample.paleontology =
                    prompt::prefilled_text("Paleontology:", &sample.paleontology)?;
                sample.latitude = nonempty(Some(prompt::prefilled_text(
                    "Latitude (empty to clear):",
                    sample.latitude.as_deref().unwrap_or(""),
                )?));
                sample.longitude = nonempty(Some(prompt::prefilled_text(
                    "Longitude (empty to clear):",
                    sample.longitude.as_deref().unwrap_or(""),
                )?));

                if !ctx.confirm.confirm("Save changes to the collection?")? {
                    return Err(anyhow!("Aborted"));
                }
            } else {
                if let Some(number) = number {
                    sample.number = number;
                }
                if let Some(collector) = collector {
                    sample.collector = collector;
                }
                if let Some(locality) = locality {
                    sample.locality = locality;
                }
                if let Some(country) = country {
                    sample.country = country;
                }
                if let Some(mineralogy) = mineralogy {
                    sample.mineralogy = mineralogy;
                }
                if let Some(paleontology) = paleontology {
                    sample.paleontology = paleontology;
                }
                if let Some(latitude) = latitude {
                    sample.latitude = nonempty(Some(latitude));
                }
                if let Some(longitude) = longitude {
                    sample.longitude = nonempty(Some(longitude));
                }
            }
            validate::check(&sample)?;
            if oldsample != sample {
                ctx.store.update(sample).await?;
                println!("Modified sample {id}");
            } else {
                println!("Sample unchanged.")
            }
            Ok(())
        }
        Commands::Remove { id } => {
            if let Err(Error::RecordNotFound(_)) = ctx.store.get(&id).await {
                println!("Sample {id} not found");
                return Ok(());
            }
            match ctx.confirm.confirm("Really remove this sample?")? {
                true => {
                    ctx.store.delete_by_id(&id).await?;
                    println!("Removed sample {id}");
                    Ok(())
                }
                false => Ok(()),
            }
        }
        Commands::Clear => {
            match ctx
                .confirm
                .confirm("Really remove ALL samples? This cannot be undone.")?
            {
                true => {
                    ctx.store.clear().await?;
                    println!("Cleared the collection.");
                    Ok(())
                }
                false => Ok(()),
            }
        }
        Commands::Export { file } => {
            let samples = ctx.store.load_all().await?;
            match export::to_csv(&samples) {
                Ok(csv) => {
                    let path = match file {
                        Some(path) => path,
                        None => PathBuf::from(export::default_filename(
                            OffsetDateTime::now_utc().date(),
                        )?),
                    };
                    fs::write(&path, csv).await?;
                    println!("Exported {} records to {}", samples.len(), path.display());
                    Ok(())
                }
                Err(Error::NothingToExport) => {
                    println!("No records to export.");
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Confirmer, Error as PromptError};
    use libgeo::{id::IdGenerator, store::RecordStore};
    use std::sync::atomic::{AtomicU32, Ordering};
    use test_log::test;

    struct StaticConfirmer(bool);
    impl Confirmer for StaticConfirmer {
        fn confirm(&self, _message: &str) -> Result<bool, PromptError> {
            Ok(self.0)
        }
    }

    struct SequentialIds(AtomicU32);
    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            format!("test-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn test_ctx(dir: &tempfile::TempDir, confirm: bool) -> AppContext {
        AppContext {
            store: RecordStore::new(dir.path().join("samples.json")),
            ids: Box::new(SequentialIds(AtomicU32::new(0))),
            confirm: Box::new(StaticConfirmer(confirm)),
        }
    }

    fn add_command(latitude: Option<&str>, longitude: Option<&str>) -> Commands {
        Commands::Add {
            number: Some("M-001".to_string()),
            collector: Some("R. Alvarez".to_string()),
            locality: Some("Cusco".to_string()),
            country: Some("Peru".to_string()),
            mineralogy: Some("Quartz".to_string()),
            paleontology: Some("None observed".to_string()),
            latitude: latitude.map(String::from),
            longitude: longitude.map(String::from),
        }
    }

    #[test(tokio::test)]
    async fn add_uses_generated_id_and_persists() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        handle_command(add_command(None, None), &ctx)
            .await
            .expect("add failed");
        let samples = ctx.store.load_all().await.expect("load failed");
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].id, "test-0");
        assert_eq!(samples[0].number, "M-001");
        assert_eq!(samples[0].latitude, None);
    }

    #[test(tokio::test)]
    async fn add_rejects_unpaired_coordinates() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        let res = handle_command(add_command(Some("40.7128"), None), &ctx).await;
        assert!(res.is_err());
        assert!(ctx.store.load_all().await.expect("load failed").is_empty());
    }

    #[test(tokio::test)]
    async fn add_accepts_paired_coordinates() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        handle_command(add_command(Some("40.7128"), Some("-74.0060")), &ctx)
            .await
            .expect("add failed");
        let samples = ctx.store.load_all().await.expect("load failed");
        assert_eq!(samples[0].latitude.as_deref(), Some("40.7128"));
        assert_eq!(samples[0].longitude.as_deref(), Some("-74.0060"));
    }

    #[test(tokio::test)]
    async fn add_rejects_missing_required_flags() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        let command = Commands::Add {
            number: Some("M-001".to_string()),
            collector: None,
            locality: None,
            country: None,
            mineralogy: None,
            paleontology: None,
            latitude: None,
            longitude: None,
        };
        assert!(handle_command(command, &ctx).await.is_err());
        assert!(ctx.store.load_all().await.expect("load failed").is_empty());
    }

    #[test(tokio::test)]
    async fn remove_confirmed_deletes_the_record() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        handle_command(add_command(None, None), &ctx)
            .await
            .expect("add failed");
        handle_command(
            Commands::Remove {
                id: "test-0".to_string(),
            },
            &ctx,
        )
        .await
        .expect("remove failed");
        assert!(ctx.store.load_all().await.expect("load failed").is_empty());
    }

    #[test(tokio::test)]
    async fn remove_declined_leaves_the_record() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        handle_command(add_command(None, None), &ctx)
            .await
            .expect("add failed");

        let declined = test_ctx(&dir, false);
        handle_command(
            Commands::Remove {
                id: "test-0".to_string(),
            },
            &declined,
        )
        .await
        .expect("remove failed");
        assert_eq!(
            declined.store.load_all().await.expect("load failed").len(),
            1
        );
    }

    #[test(tokio::test)]
    async fn clear_confirmed_empties_the_collection() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        handle_command(add_command(None, None), &ctx)
            .await
            .expect("add failed");
        handle_command(Commands::Clear, &ctx)
            .await
            .expect("clear failed");
        assert!(ctx.store.load_all().await.expect("load failed").is_empty());
    }

    #[test(tokio::test)]
    async fn clear_declined_is_a_noop() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        handle_command(add_command(None, None), &ctx)
            .await
            .expect("add failed");

        let declined = test_ctx(&dir, false);
        handle_command(Commands::Clear, &declined)
            .await
            .expect("clear failed");
        assert_eq!(
            declined.store.load_all().await.expect("load failed").len(),
            1
        );
    }

    #[test(tokio::test)]
    async fn modify_merges_fields_and_preserves_id() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        handle_command(add_command(None, None), &ctx)
            .await
            .expect("add failed");
        let command = Commands::Modify {
            id: "test-0".to_string(),
            number: None,
            collector: None,
            locality: None,
            country: None,
            mineralogy: Some("Feldspar".to_string()),
            paleontology: None,
            latitude: None,
            longitude: None,
        };
        handle_command(command, &ctx).await.expect("modify failed");
        let samples = ctx.store.load_all().await.expect("load failed");
        assert_eq!(samples[0].id, "test-0");
        assert_eq!(samples[0].mineralogy, "Feldspar");
        assert_eq!(samples[0].collector, "R. Alvarez");
    }

    #[test(tokio::test)]
    async fn modify_rejects_unpaired_coordinates_without_mutation() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        handle_command(add_command(None, None), &ctx)
            .await
            .expect("add failed");
        let command = Commands::Modify {
            id: "test-0".to_string(),
            number: None,
            collector: None,
            locality: None,
            country: None,
            mineralogy: None,
            paleontology: None,
            latitude: Some("40.7128".to_string()),
            longitude: None,
        };
        assert!(handle_command(command, &ctx).await.is_err());
        let samples = ctx.store.load_all().await.expect("load failed");
        assert_eq!(samples[0].latitude, None);
    }

    #[test(tokio::test)]
    async fn export_writes_a_dated_csv_file() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        handle_command(add_command(None, None), &ctx)
            .await
            .expect("add failed");
        let out = dir.path().join("export.csv");
        handle_command(
            Commands::Export {
                file: Some(out.clone()),
            },
            &ctx,
        )
        .await
        .expect("export failed");
        let contents = std::fs::read_to_string(&out).expect("read failed");
        assert!(contents.starts_with("ID,Número de muestra"));
        assert!(contents.contains("\"M-001\""));
    }

    #[test(tokio::test)]
    async fn export_of_empty_collection_writes_nothing() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let ctx = test_ctx(&dir, true);
        let out = dir.path().join("export.csv");
        handle_command(
            Commands::Export {
                file: Some(out.clone()),
            },
            &ctx,
        )
        .await
        .expect("export failed");
        assert!(!out.exists());
    }
}
