// Low-level storage access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.
// The association between tags and playlists is owned
// by its own repository.

use crate::entities::*;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Fields of a tag that should be changed.
///
/// `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagUpdate {
    pub name: Option<String>,
    pub tag_type: Option<TagType>,
}

impl TagUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.tag_type.is_none()
    }
}

pub trait TagRepo {
    // Fails with `AlreadyExists` if the name is taken.
    fn create_tag(&self, tag: Tag) -> Result<()>;

    // All names are resolved before the ids. Results are
    // ordered like `ids` followed by `names`.
    fn load_tags(&self, ids: &[&str], names: &[&str]) -> Result<Vec<Tag>>;

    // Overwrites unconditionally, even if another tag owns the name.
    fn upsert_tag(&self, tag: Tag) -> Result<()>;

    fn update_tag(&self, id: &str, update: TagUpdate) -> Result<()>;

    // Also removes all associations of this tag.
    fn remove_tag(&self, id: &str) -> Result<()>;

    fn all_tags(&self) -> Result<Vec<Tag>>;
    fn count_tags(&self) -> Result<usize>;
}

pub trait PlaylistRepo {
    // Fails with `AlreadyExists` if the name is taken.
    fn create_playlist(&self, playlist: Playlist) -> Result<()>;

    // Same resolution order as `TagRepo::load_tags`.
    fn load_playlists(&self, ids: &[&str], names: &[&str]) -> Result<Vec<Playlist>>;

    fn upsert_playlist(&self, playlist: Playlist) -> Result<()>;
    fn rename_playlist(&self, id: &str, name: &str) -> Result<()>;

    // Associations are left untouched!
    fn remove_playlist(&self, id: &str) -> Result<()>;

    fn put_track(&self, playlist_id: &str, track: Track) -> Result<()>;
    fn remove_track(&self, playlist_id: &str, track_id: &str) -> Result<()>;

    fn count_play(&self, id: &str) -> Result<()>;
    fn like(&self, id: &str) -> Result<()>;
    fn dislike(&self, id: &str) -> Result<()>;

    fn all_playlists(&self) -> Result<Vec<Playlist>>;
    fn count_playlists(&self) -> Result<usize>;
}

pub trait TagAssociationRepo {
    // Fails with `NotFound` if the tag does not exist.
    // The playlist is not checked.
    fn assign_tag(&self, tag_id: &str, playlist_id: &str) -> Result<()>;

    // Fails with `NotFound` if the tag has never been assigned.
    fn unassign_tag(&self, tag_id: &str, playlist_id: &str) -> Result<()>;

    // Fails with `NotFound` if no tag with this name exists.
    fn playlist_ids_of_tag(&self, tag_name: &str) -> Result<HashSet<Id>>;

    fn tag_ids_of_playlist(&self, playlist_id: &str) -> Result<HashSet<Id>>;

    fn remove_tag_associations(&self, tag_id: &str) -> Result<()>;
}
