//! In-memory implementation of the tagmix repositories.

use parking_lot::RwLock;

mod association_index;
mod playlist_store;
mod repo_impl;
mod tag_store;

pub use self::{association_index::*, playlist_store::*, tag_store::*};

/// The in-memory database.
///
/// Each store is guarded by its own lock, allowing many
/// concurrent readers or a single writer. Operations that
/// span multiple stores always acquire the locks in the
/// order of the fields below to prevent deadlocks.
///
/// Operations that involve multiple stores are **not**
/// atomic as a whole unless stated otherwise, e.g. readers
/// might observe a new playlist before its tags are assigned.
#[derive(Debug, Default)]
pub struct MemoryDb {
    tags: RwLock<TagStore>,
    playlists: RwLock<PlaylistStore>,
    associations: RwLock<AssociationIndex>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifies that both directions of the tag/playlist
    /// association agree with each other.
    pub fn check_association_consistency(&self) -> bool {
        let consistent = self.associations.read().is_consistent();
        if !consistent {
            log::error!("Inconsistent tag/playlist associations");
        }
        consistent
    }
}
