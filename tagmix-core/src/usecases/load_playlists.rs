use super::prelude::*;
use crate::RepoError;
use itertools::Itertools as _;

pub fn load_playlists<R: PlaylistRepo>(
    repo: &R,
    ids: &[&str],
    names: &[&str],
) -> Result<Vec<Playlist>> {
    repo.load_playlists(ids, names)
        .map_err(Error::from_playlist_repo)
}

/// Loads the playlists together with their tags.
pub fn load_playlists_with_tags<R>(
    repo: &R,
    ids: &[&str],
    names: &[&str],
) -> Result<Vec<(Playlist, Vec<Tag>)>>
where
    R: TagRepo + PlaylistRepo + TagAssociationRepo,
{
    let playlists = load_playlists(repo, ids, names)?;
    let mut results = Vec::with_capacity(playlists.len());
    for playlist in playlists {
        let tags = load_tags_of_playlist(repo, playlist.id.as_str())?;
        results.push((playlist, tags));
    }
    Ok(results)
}

// Ordered by name
pub(crate) fn load_tags_of_playlist<R>(repo: &R, playlist_id: &str) -> Result<Vec<Tag>>
where
    R: TagRepo + TagAssociationRepo,
{
    let tag_ids = repo.tag_ids_of_playlist(playlist_id)?;
    let tag_ids: Vec<_> = tag_ids.iter().map(Id::as_str).sorted_unstable().collect();
    let mut tags = load_existing("tag", &tag_ids, |id| repo.load_tags(&[id], &[]))?;
    tags.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(tags)
}

// Ids read from the association index may refer to objects
// that have been removed in the meantime or never existed.
// Those are skipped, only other failures are reported.
pub(crate) fn load_existing<T>(
    what: &str,
    ids: &[&str],
    load: impl Fn(&str) -> std::result::Result<Vec<T>, RepoError>,
) -> Result<Vec<T>> {
    let mut objects = Vec::with_capacity(ids.len());
    for id in ids {
        match load(id) {
            Ok(loaded) => objects.extend(loaded),
            Err(RepoError::NotFound) => {
                log::debug!("Skipping {what} '{id}' that doesn't exist");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(objects)
}
