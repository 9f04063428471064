use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator as _};
use thiserror::Error;

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id       : Id,
    pub name     : String,
    pub tag_type : TagType,
}

/// The kind of a tag.
///
/// The discriminants are single bits, so that a set of types
/// can be combined into a mask by the caller.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    FromPrimitive, ToPrimitive, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum TagType {
    Artist = 1 << 0,
    Mood   = 1 << 1,
    Genre  = 1 << 2,
}

impl TagType {
    pub fn bits(self) -> u8 {
        // All discriminants fit into a single byte.
        self.to_u8().unwrap_or_default()
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::from_u8(bits)
    }

    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid tag type: {0}")]
pub struct InvalidTagType(pub u8);

impl TryFrom<u8> for TagType {
    type Error = InvalidTagType;
    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(InvalidTagType(bits))
    }
}
