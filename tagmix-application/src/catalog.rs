use std::time::Instant;

use super::{prelude as flows, *};

/// The service boundary of the catalog.
///
/// Every operation is reported to the observer with its
/// name, duration and outcome after it has finished.
/// All operations take `&self` so the catalog can be
/// shared between threads, e.g. within an `Arc`.
#[derive(Debug, Default)]
pub struct Catalog<O> {
    db: MemoryDb,
    observer: O,
}

impl<O: OperationObserver> Catalog<O> {
    pub fn new(observer: O) -> Self {
        Self {
            db: MemoryDb::new(),
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn observe<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&MemoryDb) -> Result<T>,
    ) -> Result<T> {
        let started = Instant::now();
        let result = f(&self.db);
        self.observer
            .operation_finished(operation, started.elapsed(), Outcome::of(&result));
        result
    }

    // -- tags -- //

    pub fn create_tag(&self, new_tag: usecases::NewTag) -> Result<Id> {
        self.observe("create_tag", |db| Ok(usecases::create_tag(db, new_tag)?))
    }

    pub fn load_tags(&self, ids: &[&str], names: &[&str]) -> Result<Vec<Tag>> {
        self.observe("load_tags", |db| Ok(usecases::load_tags(db, ids, names)?))
    }

    pub fn upsert_tag(&self, tag: Tag) -> Result<()> {
        self.observe("upsert_tag", |db| Ok(usecases::upsert_tag(db, tag)?))
    }

    pub fn update_tag(&self, id: &str, update: TagUpdate) -> Result<()> {
        self.observe("update_tag", |db| Ok(usecases::update_tag(db, id, update)?))
    }

    pub fn remove_tag(&self, id: &str) -> Result<()> {
        self.observe("remove_tag", |db| flows::remove_tag(db, id))
    }

    pub fn tag_types(&self) -> Result<Vec<TagType>> {
        self.observe("tag_types", |_| Ok(usecases::load_tag_types()))
    }

    pub fn all_tags(&self) -> Result<Vec<Tag>> {
        self.observe("all_tags", |db| Ok(db.all_tags()?))
    }

    pub fn count_tags(&self) -> Result<usize> {
        self.observe("count_tags", |db| Ok(db.count_tags()?))
    }

    // -- playlists -- //

    pub fn create_playlist(&self, new_playlist: usecases::NewPlaylist) -> Result<Id> {
        self.observe("create_playlist", |db| {
            flows::create_playlist(db, new_playlist)
        })
    }

    pub fn load_playlists(&self, ids: &[&str], names: &[&str]) -> Result<Vec<Playlist>> {
        self.observe("load_playlists", |db| {
            Ok(usecases::load_playlists(db, ids, names)?)
        })
    }

    pub fn load_playlists_with_tags(
        &self,
        ids: &[&str],
        names: &[&str],
    ) -> Result<Vec<(Playlist, Vec<Tag>)>> {
        self.observe("load_playlists_with_tags", |db| {
            flows::load_playlists_with_tags(db, ids, names)
        })
    }

    pub fn upsert_playlist(&self, upsert: usecases::PlaylistUpsert) -> Result<()> {
        self.observe("upsert_playlist", |db| flows::upsert_playlist(db, upsert))
    }

    pub fn rename_playlist(&self, id: &str, name: &str) -> Result<()> {
        self.observe("rename_playlist", |db| {
            Ok(usecases::rename_playlist(db, id, name)?)
        })
    }

    pub fn remove_playlist(&self, id: &str) -> Result<()> {
        self.observe("remove_playlist", |db| flows::remove_playlist(db, id))
    }

    pub fn add_track(&self, playlist_id: &str, track: Track) -> Result<()> {
        self.observe("add_track", |db| {
            Ok(usecases::add_track(db, playlist_id, track)?)
        })
    }

    pub fn remove_track(&self, playlist_id: &str, track_id: &str) -> Result<()> {
        self.observe("remove_track", |db| {
            Ok(usecases::remove_track(db, playlist_id, track_id)?)
        })
    }

    pub fn count_play(&self, id: &str) -> Result<()> {
        self.observe("count_play", |db| Ok(usecases::count_play(db, id)?))
    }

    pub fn like(&self, id: &str) -> Result<()> {
        self.observe("like", |db| Ok(usecases::like(db, id)?))
    }

    pub fn dislike(&self, id: &str) -> Result<()> {
        self.observe("dislike", |db| Ok(usecases::dislike(db, id)?))
    }

    pub fn all_playlists(&self) -> Result<Vec<Playlist>> {
        self.observe("all_playlists", |db| Ok(db.all_playlists()?))
    }

    pub fn count_playlists(&self) -> Result<usize> {
        self.observe("count_playlists", |db| Ok(db.count_playlists()?))
    }

    // -- associations -- //

    pub fn assign_tag(&self, tag_id: &str, playlist_id: &str) -> Result<()> {
        self.observe("assign_tag", |db| {
            Ok(usecases::assign_tag(db, tag_id, playlist_id)?)
        })
    }

    pub fn unassign_tag(&self, tag_id: &str, playlist_id: &str) -> Result<()> {
        self.observe("unassign_tag", |db| {
            Ok(usecases::unassign_tag(db, tag_id, playlist_id)?)
        })
    }

    pub fn playlist_ids_of_tag(&self, tag_name: &str) -> Result<Vec<Id>> {
        self.observe("playlist_ids_of_tag", |db| {
            let mut ids: Vec<_> = db.playlist_ids_of_tag(tag_name)?.into_iter().collect();
            ids.sort_unstable();
            Ok(ids)
        })
    }

    pub fn tag_ids_of_playlist(&self, playlist_id: &str) -> Result<Vec<Id>> {
        self.observe("tag_ids_of_playlist", |db| {
            let mut ids: Vec<_> = db.tag_ids_of_playlist(playlist_id)?.into_iter().collect();
            ids.sort_unstable();
            Ok(ids)
        })
    }

    // -- explore -- //

    pub fn explore(&self, tag_names: &[&str]) -> Result<flows::ExploreResult> {
        self.observe("explore", |db| flows::explore(db, tag_names))
    }

    pub fn import_seed(&self, seed: flows::Seed) -> Result<flows::ImportSummary> {
        self.observe("import_seed", |db| flows::import_seed(db, seed))
    }

    /// Verifies the internal consistency of the tag/playlist associations.
    pub fn check_consistency(&self) -> bool {
        self.db.check_association_consistency()
    }
}
