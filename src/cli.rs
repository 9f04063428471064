use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tagmix_application::{Catalog, LogObserver, NoObserver, OperationObserver};
use tagmix_boundary as json;
use tagmix_core::repositories::TagUpdate;

use crate::{config::Config, seed};

#[derive(Parser)]
#[command(version, about = "Explore playlists by their tags")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Seed catalog to import (overrides the configuration)
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find all playlists that carry every given tag
    Explore {
        #[arg(value_name = "TAG")]
        tags: Vec<String>,
    },
    /// List the available tag types
    TagTypes,
    /// Rename a tag or change its type
    UpdateTag {
        /// Current name of the tag
        #[arg(value_name = "TAG")]
        tag: String,
        /// New name, empty to keep the current one
        #[arg(long, default_value = "")]
        name: String,
        /// New type as number, 0 to keep the current one
        #[arg(long = "type", default_value_t = 0)]
        tag_type: u8,
    },
    /// Print all tags and playlists
    Dump,
}

pub fn run(args: Args) -> Result<()> {
    let Args {
        config,
        seed,
        command,
    } = args;
    let cfg = Config::try_load_from_file_or_default(config)
        .context("Unable to load configuration")?;
    let seed_file = seed.or(cfg.catalog.seed_file);

    let output = if cfg.observer.enabled {
        let observer = LogObserver::new(cfg.observer.slow_operation);
        let catalog = Catalog::new(observer);
        prepare_and_execute(&catalog, seed_file, &command)?
    } else {
        let catalog = Catalog::new(NoObserver);
        prepare_and_execute(&catalog, seed_file, &command)?
    };
    println!("{output}");
    Ok(())
}

fn prepare_and_execute<O: OperationObserver>(
    catalog: &Catalog<O>,
    seed_file: Option<PathBuf>,
    command: &Command,
) -> Result<String> {
    match seed_file {
        Some(path) => {
            log::info!("Import seed catalog from {}", path.display());
            let seed = seed::read_seed_file(&path)?;
            catalog
                .import_seed(seed)
                .with_context(|| format!("Unable to import {}", path.display()))?;
        }
        None => {
            log::warn!("No seed catalog specified => the catalog is empty");
        }
    }
    execute(catalog, command)
}

pub fn execute<O: OperationObserver>(catalog: &Catalog<O>, command: &Command) -> Result<String> {
    let output = match command {
        Command::Explore { tags } => {
            let tag_names: Vec<_> = tags.iter().map(String::as_str).collect();
            let result = catalog.explore(&tag_names)?;
            let result = json::ExploreResult {
                tags: result.tags.into_iter().map(Into::into).collect(),
                playlists: result.playlists.into_iter().map(Into::into).collect(),
            };
            serde_json::to_string_pretty(&result)?
        }
        Command::TagTypes => {
            let tag_types: Vec<json::TagTypeInfo> =
                catalog.tag_types()?.into_iter().map(Into::into).collect();
            serde_json::to_string_pretty(&tag_types)?
        }
        Command::UpdateTag {
            tag,
            name,
            tag_type,
        } => {
            let update = json::TagUpdate {
                name: name.clone(),
                tag_type: *tag_type,
            };
            let (name, tag_type) = update.try_into_changes()?;
            let id = catalog
                .load_tags(&[], &[tag.as_str()])?
                .into_iter()
                .map(|t| t.id)
                .next()
                .with_context(|| format!("Tag '{tag}' not found"))?;
            catalog.update_tag(id.as_str(), TagUpdate { name, tag_type })?;
            let tag = catalog
                .load_tags(&[id.as_str()], &[])?
                .into_iter()
                .next()
                .map(json::Tag::from)
                .context("Updated tag vanished")?;
            serde_json::to_string_pretty(&tag)?
        }
        Command::Dump => {
            let mut tags = catalog.all_tags()?;
            tags.sort_by(|a, b| a.name.cmp(&b.name));
            let mut playlists = catalog.all_playlists()?;
            playlists.sort_by(|a, b| a.name.cmp(&b.name));
            let ids: Vec<_> = playlists.iter().map(|p| p.id.as_str()).collect();
            let playlists = catalog.load_playlists_with_tags(&ids, &[])?;
            log::debug!(
                "Dump {} tag(s) and {} playlist(s)",
                catalog.count_tags()?,
                catalog.count_playlists()?
            );
            let dump = json::CatalogDump {
                tags: tags.into_iter().map(Into::into).collect(),
                playlists: playlists.into_iter().map(Into::into).collect(),
            };
            serde_json::to_string_pretty(&dump)?
        }
    };
    Ok(output)
}
