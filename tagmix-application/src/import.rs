use super::*;

/// A catalog snapshot that refers to tags by name.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub tags: Vec<usecases::NewTag>,
    pub playlists: Vec<SeedPlaylist>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct SeedPlaylist {
    pub name      : String,
    pub tracks    : Vec<Track>,
    pub creator   : Creator,
    pub counters  : Counters,
    pub tag_names : Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub tags: usize,
    pub playlists: usize,
}

/// Imports all tags and then all playlists of the seed.
///
/// The import stops at the first failure, everything
/// that has been imported until then remains.
pub fn import_seed(db: &MemoryDb, seed: Seed) -> Result<ImportSummary> {
    let Seed { tags, playlists } = seed;
    let mut summary = ImportSummary::default();
    for new_tag in tags {
        let name = new_tag.name.clone();
        usecases::create_tag(db, new_tag).inspect_err(|err| {
            log::warn!("Failed to import tag '{name}': {err}");
        })?;
        summary.tags += 1;
    }
    for seed_playlist in playlists {
        import_playlist(db, seed_playlist)?;
        summary.playlists += 1;
    }
    log::info!(
        "Imported {} tag(s) and {} playlist(s)",
        summary.tags,
        summary.playlists
    );
    Ok(summary)
}

fn import_playlist(db: &MemoryDb, seed_playlist: SeedPlaylist) -> Result<Id> {
    let SeedPlaylist {
        name,
        tracks,
        creator,
        counters,
        tag_names,
    } = seed_playlist;
    let tag_names: Vec<_> = tag_names.iter().map(String::as_str).collect();
    let tags = db.load_tags(&[], &tag_names).map_err(|err| {
        log::warn!("Playlist '{name}' refers to unknown tags {tag_names:?}: {err}");
        usecases::Error::InvalidTag
    })?;
    let tags = tags.into_iter().map(|t| t.id.into()).collect();
    usecases::create_playlist(
        db,
        usecases::NewPlaylist {
            name: name.clone(),
            tracks,
            creator,
            counters,
            tags,
        },
    )
    .inspect_err(|err| {
        log::warn!("Failed to import playlist '{name}': {err}");
    })
    .map_err(Into::into)
}
