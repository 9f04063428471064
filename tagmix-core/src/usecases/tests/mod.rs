use super::prelude::*;
use crate::RepoError;
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

// Simplistic in-memory repositories without
// any locking for testing the use cases.
#[derive(Default)]
pub struct MockDb {
    tags: RefCell<Vec<Tag>>,
    playlists: RefCell<Vec<Playlist>>,
    tag_to_playlists: RefCell<HashMap<Id, HashSet<Id>>>,
    playlist_to_tags: RefCell<HashMap<Id, HashSet<Id>>>,
}

fn resolve<T>(
    items: &[T],
    ids: &[&str],
    names: &[&str],
    id_of: impl Fn(&T) -> &str,
    name_of: impl Fn(&T) -> &str,
) -> RepoResult<Vec<T>>
where
    T: Clone,
{
    let mut resolved_ids: Vec<&str> = ids.to_vec();
    for name in names {
        let item = items
            .iter()
            .find(|x| name_of(*x) == *name)
            .ok_or(RepoError::NotFound)?;
        resolved_ids.push(id_of(item));
    }
    resolved_ids
        .into_iter()
        .map(|id| {
            items
                .iter()
                .find(|x| id_of(*x) == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        })
        .collect()
}

impl MockDb {
    // Leaves the associations of the tag behind
    pub fn forget_tag(&self, id: &str) {
        self.tags.borrow_mut().retain(|t| t.id.as_str() != id);
    }

    fn with_playlist<T>(&self, id: &str, f: impl FnOnce(&mut Playlist) -> T) -> RepoResult<T> {
        self.playlists
            .borrow_mut()
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .map(f)
            .ok_or(RepoError::NotFound)
    }
}

impl TagRepo for MockDb {
    fn create_tag(&self, tag: Tag) -> RepoResult<()> {
        if self.tags.borrow().iter().any(|t| t.name == tag.name) {
            return Err(RepoError::AlreadyExists);
        }
        self.tags.borrow_mut().push(tag);
        Ok(())
    }

    fn load_tags(&self, ids: &[&str], names: &[&str]) -> RepoResult<Vec<Tag>> {
        resolve(
            &self.tags.borrow()[..],
            ids,
            names,
            |t| t.id.as_str(),
            |t| t.name.as_str(),
        )
    }

    fn upsert_tag(&self, tag: Tag) -> RepoResult<()> {
        let mut tags = self.tags.borrow_mut();
        tags.retain(|t| t.id != tag.id);
        tags.push(tag);
        Ok(())
    }

    fn update_tag(&self, id: &str, update: TagUpdate) -> RepoResult<()> {
        let mut tags = self.tags.borrow_mut();
        let tag = tags
            .iter_mut()
            .find(|t| t.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        if let Some(name) = update.name {
            tag.name = name;
        }
        if let Some(tag_type) = update.tag_type {
            tag.tag_type = tag_type;
        }
        Ok(())
    }

    fn remove_tag(&self, id: &str) -> RepoResult<()> {
        let len = self.tags.borrow().len();
        self.tags.borrow_mut().retain(|t| t.id.as_str() != id);
        if self.tags.borrow().len() == len {
            return Err(RepoError::NotFound);
        }
        self.remove_tag_associations(id)
    }

    fn all_tags(&self) -> RepoResult<Vec<Tag>> {
        Ok(self.tags.borrow().clone())
    }

    fn count_tags(&self) -> RepoResult<usize> {
        Ok(self.tags.borrow().len())
    }
}

impl PlaylistRepo for MockDb {
    fn create_playlist(&self, playlist: Playlist) -> RepoResult<()> {
        if self
            .playlists
            .borrow()
            .iter()
            .any(|p| p.name == playlist.name)
        {
            return Err(RepoError::AlreadyExists);
        }
        self.playlists.borrow_mut().push(playlist);
        Ok(())
    }

    fn load_playlists(&self, ids: &[&str], names: &[&str]) -> RepoResult<Vec<Playlist>> {
        resolve(
            &self.playlists.borrow()[..],
            ids,
            names,
            |p| p.id.as_str(),
            |p| p.name.as_str(),
        )
    }

    fn upsert_playlist(&self, mut playlist: Playlist) -> RepoResult<()> {
        let mut playlists = self.playlists.borrow_mut();
        if let Some(old) = playlists.iter().find(|p| p.id == playlist.id) {
            playlist.created_at = old.created_at;
        }
        playlists.retain(|p| p.id != playlist.id);
        playlists.push(playlist);
        Ok(())
    }

    fn rename_playlist(&self, id: &str, name: &str) -> RepoResult<()> {
        self.with_playlist(id, |p| p.name = name.into())
    }

    fn remove_playlist(&self, id: &str) -> RepoResult<()> {
        let len = self.playlists.borrow().len();
        self.playlists.borrow_mut().retain(|p| p.id.as_str() != id);
        if self.playlists.borrow().len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn put_track(&self, playlist_id: &str, track: Track) -> RepoResult<()> {
        self.with_playlist(playlist_id, |p| p.put_track(track))
    }

    fn remove_track(&self, playlist_id: &str, track_id: &str) -> RepoResult<()> {
        self.with_playlist(playlist_id, |p| {
            p.remove_track(track_id);
        })
    }

    fn count_play(&self, id: &str) -> RepoResult<()> {
        self.with_playlist(id, |p| p.counters.play())
    }

    fn like(&self, id: &str) -> RepoResult<()> {
        self.with_playlist(id, |p| p.counters.like())
    }

    fn dislike(&self, id: &str) -> RepoResult<()> {
        self.with_playlist(id, |p| p.counters.dislike())
    }

    fn all_playlists(&self) -> RepoResult<Vec<Playlist>> {
        Ok(self.playlists.borrow().clone())
    }

    fn count_playlists(&self) -> RepoResult<usize> {
        Ok(self.playlists.borrow().len())
    }
}

impl TagAssociationRepo for MockDb {
    fn assign_tag(&self, tag_id: &str, playlist_id: &str) -> RepoResult<()> {
        if !self.tags.borrow().iter().any(|t| t.id.as_str() == tag_id) {
            return Err(RepoError::NotFound);
        }
        self.tag_to_playlists
            .borrow_mut()
            .entry(tag_id.into())
            .or_default()
            .insert(playlist_id.into());
        self.playlist_to_tags
            .borrow_mut()
            .entry(playlist_id.into())
            .or_default()
            .insert(tag_id.into());
        Ok(())
    }

    fn unassign_tag(&self, tag_id: &str, playlist_id: &str) -> RepoResult<()> {
        self.tag_to_playlists
            .borrow_mut()
            .get_mut(tag_id)
            .ok_or(RepoError::NotFound)?
            .remove(playlist_id);
        if let Some(tag_ids) = self.playlist_to_tags.borrow_mut().get_mut(playlist_id) {
            tag_ids.remove(tag_id);
        }
        Ok(())
    }

    fn playlist_ids_of_tag(&self, tag_name: &str) -> RepoResult<HashSet<Id>> {
        let tag_id = self
            .tags
            .borrow()
            .iter()
            .find(|t| t.name == tag_name)
            .map(|t| t.id.clone())
            .ok_or(RepoError::NotFound)?;
        Ok(self
            .tag_to_playlists
            .borrow()
            .get(&tag_id)
            .cloned()
            .unwrap_or_default())
    }

    fn tag_ids_of_playlist(&self, playlist_id: &str) -> RepoResult<HashSet<Id>> {
        Ok(self
            .playlist_to_tags
            .borrow()
            .get(playlist_id)
            .cloned()
            .unwrap_or_default())
    }

    fn remove_tag_associations(&self, tag_id: &str) -> RepoResult<()> {
        if let Some(playlist_ids) = self.tag_to_playlists.borrow_mut().remove(tag_id) {
            let mut playlist_to_tags = self.playlist_to_tags.borrow_mut();
            for playlist_id in playlist_ids {
                if let Some(tag_ids) = playlist_to_tags.get_mut(&playlist_id) {
                    tag_ids.remove(tag_id);
                }
            }
        }
        Ok(())
    }
}
