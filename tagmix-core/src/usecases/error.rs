use crate::{gateways::observe::HasErrorKind, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("One or more invalid tags found")]
    InvalidTag,
    #[error("One or more invalid playlists found")]
    InvalidPlaylist,
    #[error("The name already exists")]
    NameExists,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Coarse classification of errors that callers
/// are supposed to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTag | Self::InvalidPlaylist => ErrorKind::NotFound,
            Self::NameExists => ErrorKind::Conflict,
            Self::Repo(repositories::Error::NotFound) => ErrorKind::NotFound,
            Self::Repo(repositories::Error::AlreadyExists) => ErrorKind::Conflict,
            Self::Repo(repositories::Error::Other(_)) => ErrorKind::Internal,
        }
    }

    pub(crate) fn from_tag_repo(err: repositories::Error) -> Self {
        match err {
            repositories::Error::NotFound => Self::InvalidTag,
            repositories::Error::AlreadyExists => Self::NameExists,
            err => Self::Repo(err),
        }
    }

    pub(crate) fn from_playlist_repo(err: repositories::Error) -> Self {
        match err {
            repositories::Error::NotFound => Self::InvalidPlaylist,
            repositories::Error::AlreadyExists => Self::NameExists,
            err => Self::Repo(err),
        }
    }
}

impl HasErrorKind for Error {
    fn kind(&self) -> ErrorKind {
        Error::kind(self)
    }
}
