use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tagmix_application::prelude::{Seed, SeedPlaylist};
use tagmix_boundary::SeedCatalog;
use tagmix_core::{entities::Counters, usecases::NewTag};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read seed file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Invalid seed catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn read_seed_file(path: &Path) -> Result<Seed, Error> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_seed(&content)
}

pub fn parse_seed(content: &str) -> Result<Seed, Error> {
    let catalog: SeedCatalog = toml::from_str(content)?;
    Ok(from_seed_catalog(catalog))
}

fn from_seed_catalog(catalog: SeedCatalog) -> Seed {
    let SeedCatalog { tags, playlists } = catalog;
    let tags = tags
        .into_iter()
        .map(|tag| NewTag {
            name: tag.name,
            tag_type: tag.tag_type.into(),
        })
        .collect();
    let playlists = playlists
        .into_iter()
        .map(|playlist| {
            let tagmix_boundary::SeedPlaylist {
                name,
                tags,
                plays,
                likes,
                creator,
                tracks,
            } = playlist;
            SeedPlaylist {
                name,
                tracks: tracks.into_iter().map(Into::into).collect(),
                creator: creator.into(),
                counters: Counters { plays, likes },
                tag_names: tags,
            }
        })
        .collect();
    Seed { tags, playlists }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tagmix_core::entities::TagType;

    pub const DEMO_SEED: &str = r#"
        [[tags]]
        name = "chill"
        type = "mood"

        [[tags]]
        name = "jazz"
        type = "genre"

        [[playlists]]
        name = "Sunday"
        tags = ["chill", "jazz"]
        plays = 10
        likes = 2
        creator = { id = "u1", name = "Ann" }
        tracks = [{ id = "t1", name = "Intro" }]

        [[playlists]]
        name = "Focus"
        tags = ["chill"]
        plays = 12
    "#;

    #[test]
    fn parse_demo_seed() {
        let seed = parse_seed(DEMO_SEED).unwrap();
        assert_eq!(seed.tags.len(), 2);
        assert_eq!(seed.tags[0].tag_type, TagType::Mood);
        assert_eq!(seed.tags[1].tag_type, TagType::Genre);

        let sunday = &seed.playlists[0];
        assert_eq!(sunday.tag_names, vec!["chill", "jazz"]);
        assert_eq!(sunday.counters, Counters { plays: 10, likes: 2 });
        assert_eq!(sunday.creator.name, "Ann");
        assert_eq!(sunday.tracks[0].id, "t1");

        let focus = &seed.playlists[1];
        assert_eq!(focus.counters, Counters { plays: 12, likes: 0 });
        assert!(focus.tracks.is_empty());
    }

    #[test]
    fn reject_unknown_tag_type() {
        let err = parse_seed("[[tags]]\nname = \"x\"\ntype = \"color\"").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn report_missing_file() {
        let err = read_seed_file(Path::new("no-such-seed.toml")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
