use super::prelude::*;

pub fn assign_tag<R: TagAssociationRepo>(repo: &R, tag_id: &str, playlist_id: &str) -> Result<()> {
    repo.assign_tag(tag_id, playlist_id)
        .map_err(Error::from_tag_repo)?;
    log::debug!("Assigned tag {tag_id} to playlist {playlist_id}");
    Ok(())
}

pub fn unassign_tag<R: TagAssociationRepo>(
    repo: &R,
    tag_id: &str,
    playlist_id: &str,
) -> Result<()> {
    repo.unassign_tag(tag_id, playlist_id)
        .map_err(Error::from_tag_repo)?;
    log::debug!("Unassigned tag {tag_id} from playlist {playlist_id}");
    Ok(())
}

// Fails on the first unknown tag. Tags that have
// been assigned before are not rolled back.
pub(crate) fn assign_tags<R: TagAssociationRepo>(
    repo: &R,
    tag_ids: &[&str],
    playlist_id: &str,
) -> Result<()> {
    for tag_id in tag_ids {
        assign_tag(repo, tag_id, playlist_id)?;
    }
    Ok(())
}

// Tags that vanished concurrently are skipped.
pub(crate) fn unassign_all_tags<R: TagAssociationRepo>(repo: &R, playlist_id: &str) -> Result<()> {
    let tag_ids = repo.tag_ids_of_playlist(playlist_id)?;
    for tag_id in &tag_ids {
        match unassign_tag(repo, tag_id.as_str(), playlist_id) {
            Ok(()) => {}
            Err(Error::InvalidTag) => {
                log::warn!("Failed to unassign vanished tag {tag_id} from playlist {playlist_id}");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

// Checks that all tags exist before anything is modified.
pub(crate) fn check_tags_exist<R: TagRepo>(repo: &R, tag_ids: &[&str]) -> Result<()> {
    if tag_ids.is_empty() {
        return Ok(());
    }
    repo.load_tags(tag_ids, &[]).map_err(Error::from_tag_repo)?;
    Ok(())
}
