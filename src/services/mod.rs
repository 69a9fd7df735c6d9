//! Business logic services

pub mod catalog;
pub mod circulation;
pub mod fine;
pub mod librarians;
pub mod members;

use crate::{config::LoansConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub librarians: librarians::LibrariansService,
    pub circulation: circulation::CirculationService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository and loan policy
    pub fn new(repository: Repository, loans: LoansConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            members: members::MembersService::new(repository.clone()),
            librarians: librarians::LibrariansService::new(repository.clone()),
            circulation: circulation::CirculationService::new(repository.clone(), loans),
            repository,
        }
    }

    /// True when the backing store is reachable
    pub async fn ready(&self) -> bool {
        self.repository.ping().await
    }
}
