use super::*;

pub fn upsert_playlist(db: &MemoryDb, upsert: usecases::PlaylistUpsert) -> Result<()> {
    let id = upsert.id.clone();
    Ok(usecases::upsert_playlist(db, upsert).inspect_err(|err| {
        log::warn!("Failed to upsert playlist {id}: {err}");
    })?)
}
