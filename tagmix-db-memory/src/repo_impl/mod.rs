use super::*;
use tagmix_core::{entities::*, repositories::*, RepoError};

mod association;
mod playlist;
mod tag;

type Result<T> = std::result::Result<T, RepoError>;
