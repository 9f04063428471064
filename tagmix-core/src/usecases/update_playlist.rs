use super::{
    assign_tags::{assign_tags, check_tags_exist, unassign_all_tags},
    prelude::*,
};

/// Replaces a playlist entirely or creates it
/// with the given id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistUpsert {
    pub id: Id,
    pub name: String,
    pub tracks: Vec<Track>,
    pub creator: Creator,
    pub counters: Counters,
    /// Ids of the tags that should replace the current tags.
    pub tags: Vec<String>,
}

pub fn upsert_playlist<R>(repo: &R, upsert: PlaylistUpsert) -> Result<()>
where
    R: TagRepo + PlaylistRepo + TagAssociationRepo,
{
    let PlaylistUpsert {
        id,
        name,
        tracks,
        creator,
        counters,
        tags,
    } = upsert;
    let tag_ids: Vec<_> = tags.iter().map(String::as_str).collect();
    check_tags_exist(repo, &tag_ids)?;

    unassign_all_tags(repo, id.as_str())?;
    let mut playlist = Playlist {
        id: id.clone(),
        name,
        tracks,
        creator,
        // The creation time of an existing playlist is preserved
        created_at: Timestamp::now(),
        counters,
    };
    playlist.dedup_tracks();
    repo.upsert_playlist(playlist)?;
    assign_tags(repo, &tag_ids, id.as_str())?;
    log::info!("Upserted playlist {id}");
    Ok(())
}

pub fn rename_playlist<R: PlaylistRepo>(repo: &R, id: &str, name: &str) -> Result<()> {
    repo.rename_playlist(id, name)
        .map_err(Error::from_playlist_repo)?;
    log::info!("Renamed playlist {id} to '{name}'");
    Ok(())
}
