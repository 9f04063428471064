use super::prelude::*;

pub fn count_play<R: PlaylistRepo>(repo: &R, id: &str) -> Result<()> {
    repo.count_play(id).map_err(Error::from_playlist_repo)
}

pub fn like<R: PlaylistRepo>(repo: &R, id: &str) -> Result<()> {
    repo.like(id).map_err(Error::from_playlist_repo)
}

pub fn dislike<R: PlaylistRepo>(repo: &R, id: &str) -> Result<()> {
    repo.dislike(id).map_err(Error::from_playlist_repo)
}
