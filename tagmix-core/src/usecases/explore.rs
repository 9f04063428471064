use super::prelude::*;
use super::load_playlists::load_existing;
use crate::{util::rank::sort_by_popularity_desc, RepoError};
use itertools::Itertools as _;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploreResult {
    /// All tags of the matching playlists, ordered by name.
    pub tags: Vec<Tag>,
    /// The matching playlists, most popular first.
    pub playlists: Vec<Playlist>,
}

impl ExploreResult {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.playlists.is_empty()
    }
}

/// Finds all playlists that carry every one of the given tags.
///
/// Unknown tag names simply don't match anything, they
/// are not reported as an error.
pub fn explore<R>(repo: &R, tag_names: &[&str]) -> Result<ExploreResult>
where
    R: TagRepo + PlaylistRepo + TagAssociationRepo,
{
    let playlist_ids = playlist_ids_with_all_tags(repo, tag_names)?;
    if playlist_ids.is_empty() {
        return Ok(ExploreResult::default());
    }

    // Sorting the ids first makes the order of exact ties reproducible
    let playlist_ids: Vec<_> = playlist_ids
        .iter()
        .map(Id::as_str)
        .sorted_unstable()
        .collect();
    let mut playlists = load_existing("playlist", &playlist_ids, |id| {
        repo.load_playlists(&[id], &[])
    })?;
    sort_by_popularity_desc(&mut playlists);

    let tag_ids = tag_ids_of_any_playlist(repo, &playlists)?;
    let tag_ids: Vec<_> = tag_ids.iter().map(Id::as_str).sorted_unstable().collect();
    let mut tags = load_existing("tag", &tag_ids, |id| repo.load_tags(&[id], &[]))?;
    tags.sort_by(|a, b| a.name.cmp(&b.name));

    log::debug!(
        "Explored {} playlist(s) with {} tag(s) for {:?}",
        playlists.len(),
        tags.len(),
        tag_names
    );
    Ok(ExploreResult { tags, playlists })
}

// Intersection from left to right
fn playlist_ids_with_all_tags<R>(repo: &R, tag_names: &[&str]) -> Result<HashSet<Id>>
where
    R: TagAssociationRepo,
{
    let mut common_ids: Option<HashSet<Id>> = None;
    for tag_name in tag_names {
        let ids = match repo.playlist_ids_of_tag(tag_name) {
            Ok(ids) => ids,
            Err(RepoError::NotFound) => {
                log::debug!("Unknown tag '{tag_name}'");
                return Ok(HashSet::new());
            }
            Err(err) => return Err(err.into()),
        };
        let ids = match common_ids {
            None => ids,
            Some(mut common_ids) => {
                common_ids.retain(|id| ids.contains(id));
                common_ids
            }
        };
        if ids.is_empty() {
            return Ok(ids);
        }
        common_ids = Some(ids);
    }
    Ok(common_ids.unwrap_or_default())
}

fn tag_ids_of_any_playlist<R>(repo: &R, playlists: &[Playlist]) -> Result<HashSet<Id>>
where
    R: TagAssociationRepo,
{
    let mut all_ids = HashSet::new();
    for playlist in playlists {
        all_ids.extend(repo.tag_ids_of_playlist(playlist.id.as_str())?);
    }
    Ok(all_ids)
}
