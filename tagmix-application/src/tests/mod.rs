pub mod prelude {
    pub use crate::{
        error::AppError, prelude as flows, Catalog, NoObserver, OperationObserver, Outcome,
    };
    pub use tagmix_core::{
        entities::*,
        repositories::*,
        usecases::{self, ErrorKind, ExploreResult},
    };
    pub use tagmix_db_memory::MemoryDb;

    pub use super::BackendFixture;
}

use prelude::*;

pub struct BackendFixture {
    pub db: MemoryDb,
}

impl BackendFixture {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self { db: MemoryDb::new() }
    }

    pub fn create_tag(&self, name: &str, tag_type: TagType) -> Id {
        usecases::create_tag(
            &self.db,
            usecases::NewTag {
                name: name.into(),
                tag_type,
            },
        )
        .unwrap()
    }

    pub fn create_playlist(&self, name: &str, tag_ids: &[&Id]) -> Id {
        flows::create_playlist(
            &self.db,
            usecases::NewPlaylist {
                name: name.into(),
                tags: tag_ids.iter().map(ToString::to_string).collect(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    pub fn set_counters(&self, id: &Id, plays: u64, likes: u64) {
        let id = id.as_str();
        for _ in 0..plays {
            self.db.count_play(id).unwrap();
        }
        for _ in 0..likes {
            self.db.like(id).unwrap();
        }
    }

    pub fn load_playlist_with_tags(&self, id: &str) -> (Playlist, Vec<Tag>) {
        flows::load_playlists_with_tags(&self.db, &[id], &[])
            .unwrap()
            .remove(0)
    }

    pub fn explore(&self, tag_names: &[&str]) -> ExploreResult {
        flows::explore(&self.db, tag_names).unwrap()
    }
}
