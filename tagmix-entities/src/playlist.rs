use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id         : Id,
    pub name       : String,
    pub tracks     : Vec<Track>,
    pub creator    : Creator,
    pub created_at : Timestamp,
    pub counters   : Counters,
}

impl Playlist {
    /// Inserts the track or replaces an existing
    /// track with the same id in place.
    pub fn put_track(&mut self, track: Track) {
        if let Some(existing) = self.tracks.iter_mut().find(|t| t.id == track.id) {
            *existing = track;
        } else {
            self.tracks.push(track);
        }
    }

    /// Returns `false` if no track with this id exists.
    pub fn remove_track(&mut self, track_id: &str) -> bool {
        let len = self.tracks.len();
        self.tracks.retain(|t| t.id != track_id);
        self.tracks.len() != len
    }

    /// Collapses tracks with duplicate ids: the last
    /// occurrence wins, positions follow the first one.
    pub fn dedup_tracks(&mut self) {
        let tracks = std::mem::take(&mut self.tracks);
        for track in tracks {
            self.put_track(track);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Creator {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub plays: u64,
    pub likes: u64,
}

impl Counters {
    pub fn play(&mut self) {
        self.plays = self.plays.saturating_add(1);
    }

    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    /// Likes never drop below zero.
    pub fn dislike(&mut self) {
        self.likes = self.likes.saturating_sub(1);
    }
}
