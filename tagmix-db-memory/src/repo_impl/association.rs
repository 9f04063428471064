use super::*;
use std::collections::HashSet;

impl TagAssociationRepo for MemoryDb {
    fn assign_tag(&self, tag_id: &str, playlist_id: &str) -> Result<()> {
        // The tag must not vanish before it has been assigned
        let tags = self.tags.read();
        if !tags.contains(tag_id) {
            return Err(RepoError::NotFound);
        }
        self.associations.write().assign(tag_id, playlist_id);
        Ok(())
    }

    fn unassign_tag(&self, tag_id: &str, playlist_id: &str) -> Result<()> {
        self.associations.write().unassign(tag_id, playlist_id)
    }

    fn playlist_ids_of_tag(&self, tag_name: &str) -> Result<HashSet<Id>> {
        let tags = self.tags.read();
        let tag_id = tags.try_resolve_name(tag_name)?;
        Ok(self.associations.read().playlists_of_tag(tag_id.as_str()))
    }

    fn tag_ids_of_playlist(&self, playlist_id: &str) -> Result<HashSet<Id>> {
        Ok(self.associations.read().tags_of_playlist(playlist_id))
    }

    fn remove_tag_associations(&self, tag_id: &str) -> Result<()> {
        self.associations.write().remove_tag(tag_id);
        Ok(())
    }
}
