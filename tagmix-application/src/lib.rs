mod catalog;
mod create_playlist;
mod explore;
mod import;
mod load_playlists;
mod observe;
mod remove_playlist;
mod remove_tag;
mod upsert_playlist;

pub mod prelude {
    pub use super::{
        create_playlist::*, explore::*, import::*, load_playlists::*, remove_playlist::*,
        remove_tag::*, upsert_playlist::*,
    };
}

pub mod error;

pub use self::{catalog::*, observe::*};

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use tagmix_core::{entities::*, repositories::*, usecases};
pub(crate) use tagmix_db_memory::MemoryDb;

#[cfg(test)]
pub(crate) mod tests;
