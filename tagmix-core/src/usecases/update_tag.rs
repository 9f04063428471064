use super::prelude::*;

pub fn upsert_tag<R: TagRepo>(repo: &R, tag: Tag) -> Result<()> {
    log::debug!("Upserting tag {} ('{}')", tag.id, tag.name);
    repo.upsert_tag(tag)?;
    Ok(())
}

pub fn update_tag<R: TagRepo>(repo: &R, id: &str, update: TagUpdate) -> Result<()> {
    if update.is_empty() {
        log::debug!("Nothing to update for tag {id}");
    }
    repo.update_tag(id, update).map_err(Error::from_tag_repo)?;
    log::info!("Updated tag {id}");
    Ok(())
}
