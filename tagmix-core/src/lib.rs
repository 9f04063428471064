pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use tagmix_entities::{id::*, playlist::*, tag::*, time::*};
}

pub use repositories::Error as RepoError;
