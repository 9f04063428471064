use tagmix_core::{
    gateways::observe::HasErrorKind,
    repositories::Error as RepoError,
    usecases::{Error as UsecaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] UsecaseError),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(UsecaseError::Repo(err))
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Business(err) => err.kind(),
        }
    }
}

impl HasErrorKind for AppError {
    fn kind(&self) -> ErrorKind {
        AppError::kind(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_errors_keep_their_kind() {
        assert_eq!(AppError::from(RepoError::NotFound).kind(), ErrorKind::NotFound);
        assert_eq!(
            AppError::from(RepoError::AlreadyExists).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            AppError::from(UsecaseError::InvalidTag).kind(),
            ErrorKind::NotFound
        );
    }
}
