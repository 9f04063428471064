use super::*;
use tagmix_entities as e;

impl From<e::tag::TagType> for TagType {
    fn from(from: e::tag::TagType) -> Self {
        use e::tag::TagType as T;
        match from {
            T::Artist => TagType::Artist,
            T::Mood => TagType::Mood,
            T::Genre => TagType::Genre,
        }
    }
}

impl From<TagType> for e::tag::TagType {
    fn from(from: TagType) -> Self {
        use e::tag::TagType as T;
        match from {
            TagType::Artist => T::Artist,
            TagType::Mood => T::Mood,
            TagType::Genre => T::Genre,
        }
    }
}

impl From<e::tag::TagType> for TagTypeInfo {
    fn from(from: e::tag::TagType) -> Self {
        Self {
            name: from.to_string(),
            value: from.bits(),
        }
    }
}

impl From<e::tag::Tag> for Tag {
    fn from(from: e::tag::Tag) -> Self {
        let e::tag::Tag { id, name, tag_type } = from;
        Self {
            id: id.into(),
            name,
            tag_type: tag_type.into(),
        }
    }
}

impl TagUpdate {
    /// Splits the update into the properties that should change.
    pub fn try_into_changes(
        self,
    ) -> Result<(Option<String>, Option<e::tag::TagType>), e::tag::InvalidTagType> {
        let TagUpdate { name, tag_type } = self;
        let name = Some(name).filter(|name| !name.is_empty());
        let tag_type = match tag_type {
            0 => None,
            bits => Some(e::tag::TagType::try_from(bits)?),
        };
        Ok((name, tag_type))
    }
}

impl From<e::playlist::Track> for Track {
    fn from(from: e::playlist::Track) -> Self {
        let e::playlist::Track { id, name } = from;
        Self { id, name }
    }
}

impl From<Track> for e::playlist::Track {
    fn from(from: Track) -> Self {
        let Track { id, name } = from;
        Self { id, name }
    }
}

impl From<e::playlist::Creator> for Creator {
    fn from(from: e::playlist::Creator) -> Self {
        let e::playlist::Creator { id, name } = from;
        Self { id, name }
    }
}

impl From<Creator> for e::playlist::Creator {
    fn from(from: Creator) -> Self {
        let Creator { id, name } = from;
        Self { id, name }
    }
}

impl From<e::playlist::Playlist> for Playlist {
    fn from(from: e::playlist::Playlist) -> Self {
        let e::playlist::Playlist {
            id,
            name,
            tracks,
            creator,
            created_at,
            counters,
        } = from;
        let e::playlist::Counters { plays, likes } = counters;
        Self {
            id: id.into(),
            name,
            created: created_at.as_secs(),
            creator: creator.into(),
            tracks: tracks.into_iter().map(Into::into).collect(),
            plays,
            likes,
        }
    }
}

impl From<(e::playlist::Playlist, Vec<e::tag::Tag>)> for TaggedPlaylist {
    fn from((playlist, tags): (e::playlist::Playlist, Vec<e::tag::Tag>)) -> Self {
        Self {
            playlist: playlist.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}
