use super::*;

pub fn remove_playlist(db: &MemoryDb, id: &str) -> Result<()> {
    Ok(usecases::remove_playlist(db, id).inspect_err(|err| {
        log::warn!("Failed to remove playlist {id}: {err}");
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn removed_playlist_is_no_longer_explored() {
        let fixture = BackendFixture::new();
        let tag = fixture.create_tag("tagA", TagType::Artist);
        let p1 = fixture.create_playlist("A", &[&tag]);
        let p2 = fixture.create_playlist("B", &[&tag]);

        flows::remove_playlist(&fixture.db, p1.as_str()).unwrap();
        let result = fixture.explore(&["tagA"]);
        assert_eq!(result.playlists.len(), 1);
        assert_eq!(result.playlists[0].id, p2);
        assert!(!fixture
            .db
            .tag_ids_of_playlist(p1.as_str())
            .unwrap()
            .contains(&tag));
        assert!(fixture.db.check_association_consistency());
    }

    #[test]
    fn remove_unknown_playlist() {
        let fixture = BackendFixture::new();
        let err = flows::remove_playlist(&fixture.db, "unknown").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
