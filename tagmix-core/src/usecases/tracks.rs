use super::prelude::*;

pub fn add_track<R: PlaylistRepo>(repo: &R, playlist_id: &str, track: Track) -> Result<()> {
    let track_id = track.id.clone();
    repo.put_track(playlist_id, track)
        .map_err(Error::from_playlist_repo)?;
    log::debug!("Added track {track_id} to playlist {playlist_id}");
    Ok(())
}

pub fn remove_track<R: PlaylistRepo>(repo: &R, playlist_id: &str, track_id: &str) -> Result<()> {
    repo.remove_track(playlist_id, track_id)
        .map_err(Error::from_playlist_repo)?;
    log::debug!("Removed track {track_id} from playlist {playlist_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use tagmix_entities::builders::*;

    fn track(id: &str, name: &str) -> Track {
        Track {
            id: id.into(),
            name: name.into(),
        }
    }

    #[test]
    fn add_and_remove_tracks() {
        let db = MockDb::default();
        db.create_playlist(Playlist::build().id("p").name("P").finish())
            .unwrap();
        add_track(&db, "p", track("t1", "One")).unwrap();
        add_track(&db, "p", track("t2", "Two")).unwrap();
        add_track(&db, "p", track("t1", "Uno")).unwrap();
        let p = db.load_playlists(&["p"], &[]).unwrap().remove(0);
        assert_eq!(p.tracks, vec![track("t1", "Uno"), track("t2", "Two")]);

        remove_track(&db, "p", "t1").unwrap();
        // Removing an absent track is fine
        remove_track(&db, "p", "t1").unwrap();
        let p = db.load_playlists(&["p"], &[]).unwrap().remove(0);
        assert_eq!(p.tracks, vec![track("t2", "Two")]);
    }

    #[test]
    fn tracks_of_unknown_playlist() {
        let db = MockDb::default();
        assert!(matches!(
            add_track(&db, "x", track("t1", "One")),
            Err(Error::InvalidPlaylist)
        ));
        assert!(matches!(
            remove_track(&db, "x", "t1"),
            Err(Error::InvalidPlaylist)
        ));
    }
}
