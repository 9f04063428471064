use std::collections::{HashMap, HashSet};

use tagmix_core::{entities::Id, RepoError};

type Result<T> = std::result::Result<T, RepoError>;

/// The many-to-many relation between tags and playlists.
///
/// Both directions are stored in mirrored maps that are
/// always modified together:
/// `p ∈ tag_to_playlists[t] ⇔ t ∈ playlist_to_tags[p]`
#[derive(Debug, Default)]
pub struct AssociationIndex {
    tag_to_playlists: HashMap<Id, HashSet<Id>>,
    playlist_to_tags: HashMap<Id, HashSet<Id>>,
}

impl AssociationIndex {
    pub fn assign(&mut self, tag_id: &str, playlist_id: &str) {
        self.tag_to_playlists
            .entry(tag_id.into())
            .or_default()
            .insert(playlist_id.into());
        self.playlist_to_tags
            .entry(playlist_id.into())
            .or_default()
            .insert(tag_id.into());
    }

    // The (possibly empty) set of a tag is kept after
    // unassigning, the set of a playlist is dropped when empty.
    pub fn unassign(&mut self, tag_id: &str, playlist_id: &str) -> Result<()> {
        let playlist_ids = self
            .tag_to_playlists
            .get_mut(tag_id)
            .ok_or(RepoError::NotFound)?;
        playlist_ids.remove(playlist_id);
        if let Some(tag_ids) = self.playlist_to_tags.get_mut(playlist_id) {
            tag_ids.remove(tag_id);
            if tag_ids.is_empty() {
                self.playlist_to_tags.remove(playlist_id);
            }
        }
        Ok(())
    }

    pub fn playlists_of_tag(&self, tag_id: &str) -> HashSet<Id> {
        self.tag_to_playlists
            .get(tag_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn tags_of_playlist(&self, playlist_id: &str) -> HashSet<Id> {
        self.playlist_to_tags
            .get(playlist_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn remove_tag(&mut self, tag_id: &str) {
        let Some(playlist_ids) = self.tag_to_playlists.remove(tag_id) else {
            return;
        };
        for playlist_id in playlist_ids {
            if let Some(tag_ids) = self.playlist_to_tags.get_mut(&playlist_id) {
                tag_ids.remove(tag_id);
                if tag_ids.is_empty() {
                    self.playlist_to_tags.remove(&playlist_id);
                }
            }
        }
    }

    pub fn is_consistent(&self) -> bool {
        let forward = self.tag_to_playlists.iter().all(|(tag_id, playlist_ids)| {
            playlist_ids.iter().all(|playlist_id| {
                self.playlist_to_tags
                    .get(playlist_id)
                    .is_some_and(|tag_ids| tag_ids.contains(tag_id))
            })
        });
        let backward = self.playlist_to_tags.iter().all(|(playlist_id, tag_ids)| {
            tag_ids.iter().all(|tag_id| {
                self.tag_to_playlists
                    .get(tag_id)
                    .is_some_and(|playlist_ids| playlist_ids.contains(playlist_id))
            })
        });
        forward && backward
    }
}
