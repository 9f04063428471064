use super::prelude::*;

pub fn remove_tag<R: TagRepo>(repo: &R, id: &str) -> Result<()> {
    repo.remove_tag(id).map_err(Error::from_tag_repo)?;
    log::info!("Removed tag {id}");
    Ok(())
}
