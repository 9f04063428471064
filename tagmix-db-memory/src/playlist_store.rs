use std::collections::HashMap;

use tagmix_core::{entities::*, RepoError};

type Result<T> = std::result::Result<T, RepoError>;

/// Playlists by id with a secondary index by name.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: HashMap<Id, Playlist>,
    name_to_id: HashMap<String, Id>,
}

impl PlaylistStore {
    pub fn create(&mut self, playlist: Playlist) -> Result<()> {
        if self.name_to_id.contains_key(&playlist.name)
            || self.playlists.contains_key(&playlist.id)
        {
            return Err(RepoError::AlreadyExists);
        }
        self.store(playlist);
        Ok(())
    }

    pub fn load(&self, ids: &[&str], names: &[&str]) -> Result<Vec<Playlist>> {
        let mut resolved_ids = Vec::with_capacity(ids.len() + names.len());
        resolved_ids.extend_from_slice(ids);
        for name in names {
            let id = self.name_to_id.get(*name).ok_or(RepoError::NotFound)?;
            resolved_ids.push(id.as_str());
        }
        resolved_ids
            .into_iter()
            .map(|id| self.playlists.get(id).cloned().ok_or(RepoError::NotFound))
            .collect()
    }

    // Keeps the creation time of an existing playlist.
    pub fn upsert(&mut self, mut playlist: Playlist) {
        if let Some(old) = self.playlists.get(&playlist.id) {
            playlist.created_at = old.created_at;
            let old_name = old.name.clone();
            self.release_name(&old_name, playlist.id.as_str());
        }
        self.store(playlist);
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<()> {
        let playlist = self.playlists.get_mut(id).ok_or(RepoError::NotFound)?;
        let old_name = std::mem::replace(&mut playlist.name, name.to_owned());
        let id = playlist.id.clone();
        self.release_name(&old_name, id.as_str());
        self.name_to_id.insert(name.to_owned(), id);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Playlist> {
        let playlist = self.playlists.remove(id).ok_or(RepoError::NotFound)?;
        self.release_name(&playlist.name, id);
        Ok(playlist)
    }

    pub fn modify<T>(&mut self, id: &str, f: impl FnOnce(&mut Playlist) -> T) -> Result<T> {
        self.playlists
            .get_mut(id)
            .map(f)
            .ok_or(RepoError::NotFound)
    }

    pub fn all(&self) -> Vec<Playlist> {
        self.playlists.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn store(&mut self, playlist: Playlist) {
        self.name_to_id
            .insert(playlist.name.clone(), playlist.id.clone());
        self.playlists.insert(playlist.id.clone(), playlist);
    }

    fn release_name(&mut self, name: &str, id: &str) {
        if self.name_to_id.get(name).is_some_and(|owner| owner.as_str() == id) {
            self.name_to_id.remove(name);
        }
    }
}
