use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Artist,
    Mood,
    Genre,
}

/// A tag type together with its numeric value.
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct TagTypeInfo {
    pub name: String,
    pub value: u8,
}

/// A partial tag modification.
///
/// An empty name or a type of `0` leave the
/// corresponding property unchanged.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct TagUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub tag_type: u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Track {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Creator {
    pub id: String,
    pub name: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Playlist {
    pub id      : String,
    pub name    : String,
    /// Unix timestamp in seconds
    pub created : i64,
    pub creator : Creator,
    pub tracks  : Vec<Track>,
    pub plays   : u64,
    pub likes   : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct TaggedPlaylist {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub tags: Vec<Tag>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct ExploreResult {
    pub tags: Vec<Tag>,
    pub playlists: Vec<Playlist>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct CatalogDump {
    pub tags: Vec<Tag>,
    pub playlists: Vec<TaggedPlaylist>,
}

/// A catalog that refers to tags by their name.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct SeedCatalog {
    #[serde(default)]
    pub tags: Vec<SeedTag>,
    #[serde(default)]
    pub playlists: Vec<SeedPlaylist>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct SeedTag {
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct SeedPlaylist {
    pub name    : String,
    #[serde(default)]
    pub tags    : Vec<String>,
    #[serde(default)]
    pub plays   : u64,
    #[serde(default)]
    pub likes   : u64,
    #[serde(default)]
    pub creator : Creator,
    #[serde(default)]
    pub tracks  : Vec<Track>,
}
