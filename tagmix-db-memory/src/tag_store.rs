use std::collections::HashMap;

use anyhow::anyhow;
use tagmix_core::{entities::*, repositories::TagUpdate, RepoError};

type Result<T> = std::result::Result<T, RepoError>;

/// Tags by id with a secondary index by name.
#[derive(Debug, Default)]
pub struct TagStore {
    tags: HashMap<Id, Tag>,
    name_to_id: HashMap<String, Id>,
}

impl TagStore {
    pub fn create(&mut self, tag: Tag) -> Result<()> {
        if self.name_to_id.contains_key(&tag.name) || self.tags.contains_key(&tag.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.store(tag);
        Ok(())
    }

    pub fn load(&self, ids: &[&str], names: &[&str]) -> Result<Vec<Tag>> {
        let mut resolved_ids = Vec::with_capacity(ids.len() + names.len());
        resolved_ids.extend_from_slice(ids);
        for name in names {
            let id = self.resolve_name(name).ok_or(RepoError::NotFound)?;
            resolved_ids.push(id.as_str());
        }
        resolved_ids
            .into_iter()
            .map(|id| self.tags.get(id).cloned().ok_or(RepoError::NotFound))
            .collect()
    }

    pub fn upsert(&mut self, tag: Tag) {
        if let Some(old) = self.tags.get(&tag.id) {
            let old_name = old.name.clone();
            self.release_name(&old_name, tag.id.as_str());
        }
        self.store(tag);
    }

    pub fn update(&mut self, id: &str, update: TagUpdate) -> Result<()> {
        let TagUpdate { name, tag_type } = update;
        let tag = self.tags.get_mut(id).ok_or(RepoError::NotFound)?;
        if let Some(tag_type) = tag_type {
            tag.tag_type = tag_type;
        }
        if let Some(name) = name {
            let old_name = std::mem::replace(&mut tag.name, name.clone());
            let id = tag.id.clone();
            self.release_name(&old_name, id.as_str());
            self.name_to_id.insert(name, id);
        }
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Tag> {
        let tag = self.tags.remove(id).ok_or(RepoError::NotFound)?;
        self.release_name(&tag.name, id);
        Ok(tag)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tags.contains_key(id)
    }

    pub fn resolve_name(&self, name: &str) -> Option<&Id> {
        self.name_to_id.get(name)
    }

    /// Like [`TagStore::resolve_name`] but verifies that
    /// the tag behind the name index actually exists.
    pub fn try_resolve_name(&self, name: &str) -> Result<&Id> {
        let id = self.resolve_name(name).ok_or(RepoError::NotFound)?;
        if !self.contains(id.as_str()) {
            return Err(anyhow!("Tag name '{name}' refers to missing tag {id}").into());
        }
        Ok(id)
    }

    pub fn all(&self) -> Vec<Tag> {
        self.tags.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn store(&mut self, tag: Tag) {
        self.name_to_id.insert(tag.name.clone(), tag.id.clone());
        self.tags.insert(tag.id.clone(), tag);
    }

    // Only if the name still belongs to this tag
    fn release_name(&mut self, name: &str, id: &str) {
        if self.name_to_id.get(name).is_some_and(|owner| owner.as_str() == id) {
            self.name_to_id.remove(name);
        }
    }
}
