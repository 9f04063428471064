use super::*;

impl PlaylistRepo for MemoryDb {
    fn create_playlist(&self, playlist: Playlist) -> Result<()> {
        self.playlists.write().create(playlist)
    }

    fn load_playlists(&self, ids: &[&str], names: &[&str]) -> Result<Vec<Playlist>> {
        self.playlists.read().load(ids, names)
    }

    fn upsert_playlist(&self, playlist: Playlist) -> Result<()> {
        self.playlists.write().upsert(playlist);
        Ok(())
    }

    fn rename_playlist(&self, id: &str, name: &str) -> Result<()> {
        self.playlists.write().rename(id, name)
    }

    fn remove_playlist(&self, id: &str) -> Result<()> {
        self.playlists.write().remove(id).map(drop)
    }

    fn put_track(&self, playlist_id: &str, track: Track) -> Result<()> {
        self.playlists
            .write()
            .modify(playlist_id, |p| p.put_track(track))
    }

    fn remove_track(&self, playlist_id: &str, track_id: &str) -> Result<()> {
        let removed = self
            .playlists
            .write()
            .modify(playlist_id, |p| p.remove_track(track_id))?;
        if !removed {
            log::debug!("No track {track_id} in playlist {playlist_id}");
        }
        Ok(())
    }

    fn count_play(&self, id: &str) -> Result<()> {
        self.playlists.write().modify(id, |p| p.counters.play())
    }

    fn like(&self, id: &str) -> Result<()> {
        self.playlists.write().modify(id, |p| p.counters.like())
    }

    fn dislike(&self, id: &str) -> Result<()> {
        self.playlists.write().modify(id, |p| p.counters.dislike())
    }

    fn all_playlists(&self) -> Result<Vec<Playlist>> {
        Ok(self.playlists.read().all())
    }

    fn count_playlists(&self) -> Result<usize> {
        Ok(self.playlists.read().len())
    }
}
