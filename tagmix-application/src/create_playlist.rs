use super::*;

pub fn create_playlist(db: &MemoryDb, new_playlist: usecases::NewPlaylist) -> Result<Id> {
    let name = new_playlist.name.clone();
    Ok(
        usecases::create_playlist(db, new_playlist).inspect_err(|err| {
            log::warn!("Failed to create playlist '{name}': {err}");
        })?,
    )
}
