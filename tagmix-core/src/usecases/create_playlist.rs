use super::{
    assign_tags::{assign_tags, check_tags_exist},
    prelude::*,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlaylist {
    pub name: String,
    pub tracks: Vec<Track>,
    pub creator: Creator,
    /// Initial counters, e.g. when importing existing playlists.
    pub counters: Counters,
    /// Ids of the tags that should be assigned.
    pub tags: Vec<String>,
}

pub fn create_playlist<R>(repo: &R, new_playlist: NewPlaylist) -> Result<Id>
where
    R: TagRepo + PlaylistRepo + TagAssociationRepo,
{
    let NewPlaylist {
        name,
        tracks,
        creator,
        counters,
        tags,
    } = new_playlist;
    let tag_ids: Vec<_> = tags.iter().map(String::as_str).collect();
    check_tags_exist(repo, &tag_ids)?;

    let id = Id::new();
    let mut playlist = Playlist {
        id: id.clone(),
        name,
        tracks,
        creator,
        created_at: Timestamp::now(),
        counters,
    };
    playlist.dedup_tracks();
    log::debug!("Creating playlist '{}'", playlist.name);
    repo.create_playlist(playlist)
        .map_err(Error::from_playlist_repo)?;
    // A reader might see the playlist before its tags.
    assign_tags(repo, &tag_ids, id.as_str())?;
    log::info!("Created playlist {id} with {} tag(s)", tag_ids.len());
    Ok(id)
}
