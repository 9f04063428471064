use super::*;

pub use tagmix_core::usecases::ExploreResult;

pub fn explore(db: &MemoryDb, tag_names: &[&str]) -> Result<ExploreResult> {
    Ok(usecases::explore(db, tag_names).inspect_err(|err| {
        log::error!("Failed to explore {tag_names:?}: {err}");
    })?)
}
