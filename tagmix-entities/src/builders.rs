pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{playlist_builder::*, tag_builder::*};

pub mod tag_builder {

    use super::*;
    use crate::{id::*, tag::*};

    #[derive(Debug)]
    pub struct TagBuild {
        tag: Tag,
    }

    impl TagBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.tag.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.tag.name = name.into();
            self
        }
        pub fn tag_type(mut self, tag_type: TagType) -> Self {
            self.tag.tag_type = tag_type;
            self
        }
        pub fn finish(self) -> Tag {
            self.tag
        }
    }

    impl Builder for Tag {
        type Build = TagBuild;
        fn build() -> Self::Build {
            Self::Build {
                tag: Tag {
                    id: Id::new(),
                    name: "".into(),
                    tag_type: TagType::Genre,
                },
            }
        }
    }
}

pub mod playlist_builder {

    use super::*;
    use crate::{id::*, playlist::*, time::*};

    #[derive(Debug)]
    pub struct PlaylistBuild {
        playlist: Playlist,
    }

    impl PlaylistBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.playlist.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.playlist.name = name.into();
            self
        }
        pub fn tracks(mut self, tracks: Vec<Track>) -> Self {
            self.playlist.tracks = tracks;
            self
        }
        pub fn creator(mut self, id: &str, name: &str) -> Self {
            self.playlist.creator = Creator {
                id: id.into(),
                name: name.into(),
            };
            self
        }
        pub fn plays(mut self, plays: u64) -> Self {
            self.playlist.counters.plays = plays;
            self
        }
        pub fn likes(mut self, likes: u64) -> Self {
            self.playlist.counters.likes = likes;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.playlist.created_at = created_at;
            self
        }
        pub fn finish(self) -> Playlist {
            self.playlist
        }
    }

    impl Builder for Playlist {
        type Build = PlaylistBuild;
        fn build() -> Self::Build {
            Self::Build {
                playlist: Playlist {
                    id: Id::new(),
                    name: "".into(),
                    tracks: vec![],
                    creator: Creator::default(),
                    created_at: Timestamp::now(),
                    counters: Counters::default(),
                },
            }
        }
    }
}
