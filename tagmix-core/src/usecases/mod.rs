mod assign_tags;
mod counters;
mod create_playlist;
mod create_tag;
mod error;
mod explore;
mod load_playlists;
mod load_tags;
mod remove_playlist;
mod remove_tag;
mod tracks;
mod update_playlist;
mod update_tag;

#[cfg(test)]
pub mod tests;

pub use self::{
    assign_tags::*, counters::*, create_playlist::*, create_tag::*, error::*, explore::*,
    load_playlists::*, load_tags::*, remove_playlist::*, remove_tag::*, tracks::*,
    update_playlist::*, update_tag::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
