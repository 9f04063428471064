use super::*;

pub fn load_playlists_with_tags(
    db: &MemoryDb,
    ids: &[&str],
    names: &[&str],
) -> Result<Vec<(Playlist, Vec<Tag>)>> {
    Ok(usecases::load_playlists_with_tags(db, ids, names)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn load_by_id_and_name() {
        let fixture = BackendFixture::new();
        let tag = fixture.create_tag("tagA", TagType::Artist);
        let p1 = fixture.create_playlist("A", &[&tag]);
        let p2 = fixture.create_playlist("B", &[]);

        let loaded = flows::load_playlists_with_tags(&fixture.db, &[p1.as_str()], &["B"]).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].0.id, p1);
        assert_eq!(loaded[0].1.len(), 1);
        assert_eq!(loaded[1].0.id, p2);
        assert!(loaded[1].1.is_empty());
    }

    #[test]
    fn fail_on_any_missing_playlist() {
        let fixture = BackendFixture::new();
        let p1 = fixture.create_playlist("A", &[]);
        let err = flows::load_playlists_with_tags(&fixture.db, &[p1.as_str(), "x"], &[])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
