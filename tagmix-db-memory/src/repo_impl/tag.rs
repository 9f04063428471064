use super::*;

impl TagRepo for MemoryDb {
    fn create_tag(&self, tag: Tag) -> Result<()> {
        self.tags.write().create(tag)
    }

    fn load_tags(&self, ids: &[&str], names: &[&str]) -> Result<Vec<Tag>> {
        self.tags.read().load(ids, names)
    }

    fn upsert_tag(&self, tag: Tag) -> Result<()> {
        self.tags.write().upsert(tag);
        Ok(())
    }

    fn update_tag(&self, id: &str, update: TagUpdate) -> Result<()> {
        self.tags.write().update(id, update)
    }

    fn remove_tag(&self, id: &str) -> Result<()> {
        let mut tags = self.tags.write();
        // Both locks are held until the associations are gone
        let mut associations = self.associations.write();
        tags.remove(id)?;
        associations.remove_tag(id);
        Ok(())
    }

    fn all_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.read().all())
    }

    fn count_tags(&self) -> Result<usize> {
        Ok(self.tags.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagmix_entities::builders::*;

    #[test]
    fn remove_tag_cascades() {
        let db = MemoryDb::new();
        db.create_tag(Tag::build().id("a").name("A").finish())
            .unwrap();
        db.create_tag(Tag::build().id("b").name("B").finish())
            .unwrap();
        db.assign_tag("a", "p").unwrap();
        db.assign_tag("b", "p").unwrap();

        db.remove_tag("a").unwrap();
        let tag_ids = db.tag_ids_of_playlist("p").unwrap();
        assert!(!tag_ids.contains("a"));
        assert!(tag_ids.contains("b"));
        assert!(db.check_association_consistency());
        assert!(matches!(db.remove_tag("a"), Err(RepoError::NotFound)));
    }
}
