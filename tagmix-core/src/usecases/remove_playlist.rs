use super::{assign_tags::unassign_all_tags, prelude::*};

/// Removes the playlist after detaching all of its tags.
pub fn remove_playlist<R>(repo: &R, id: &str) -> Result<()>
where
    R: PlaylistRepo + TagAssociationRepo,
{
    unassign_all_tags(repo, id)?;
    repo.remove_playlist(id)
        .map_err(Error::from_playlist_repo)?;
    log::info!("Removed playlist {id}");
    Ok(())
}
