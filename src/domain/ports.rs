use crate::domain::animal::{Animal, AnimalUpdate, Visit};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage behind the animal HTTP service.
///
/// Lookups and removals report a missing record as `None`; only inserts can fail.
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    async fn list_animals(&self) -> Vec<Animal>;
    async fn get_animal(&self, id: i32) -> Option<Animal>;
    async fn insert_animal(&self, animal: Animal) -> Result<Animal>;
    async fn update_animal(&self, id: i32, update: AnimalUpdate) -> Option<Animal>;
    async fn remove_animal(&self, id: i32) -> Option<Animal>;
    async fn visits_for(&self, animal_id: i32) -> Vec<Visit>;
    async fn insert_visit(&self, visit: Visit) -> Result<Visit>;
}
