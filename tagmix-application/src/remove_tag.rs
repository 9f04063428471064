use super::*;

pub fn remove_tag(db: &MemoryDb, id: &str) -> Result<()> {
    Ok(usecases::remove_tag(db, id).inspect_err(|err| {
        log::warn!("Failed to remove tag {id}: {err}");
    })?)
}
