use crate::domain::{Animal, AnimalRepository, AnimalUpdate, Visit};
use crate::utils::error::{FleetError, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct RegistryData {
    animals: Vec<Animal>,
    visits: Vec<Visit>,
}

/// Process-lifetime animal store. One lock guards both lists so a request never
/// observes a half-applied change.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    data: RwLock<RegistryData>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(animals: Vec<Animal>, visits: Vec<Visit>) -> Self {
        Self {
            data: RwLock::new(RegistryData { animals, visits }),
        }
    }
}

#[async_trait]
impl AnimalRepository for InMemoryRegistry {
    async fn list_animals(&self) -> Vec<Animal> {
        self.data.read().await.animals.clone()
    }

    async fn get_animal(&self, id: i32) -> Option<Animal> {
        self.data
            .read()
            .await
            .animals
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    async fn insert_animal(&self, animal: Animal) -> Result<Animal> {
        let mut data = self.data.write().await;
        if data.animals.iter().any(|a| a.id == animal.id) {
            return Err(FleetError::DuplicateAnimal { id: animal.id });
        }
        data.animals.push(animal.clone());
        tracing::debug!("Stored animal {}", animal.id);
        Ok(animal)
    }

    async fn update_animal(&self, id: i32, update: AnimalUpdate) -> Option<Animal> {
        let mut data = self.data.write().await;
        let animal = data.animals.iter_mut().find(|a| a.id == id)?;
        animal.apply(update);
        Some(animal.clone())
    }

    async fn remove_animal(&self, id: i32) -> Option<Animal> {
        let mut data = self.data.write().await;
        let position = data.animals.iter().position(|a| a.id == id)?;
        Some(data.animals.remove(position))
    }

    async fn visits_for(&self, animal_id: i32) -> Vec<Visit> {
        self.data
            .read()
            .await
            .visits
            .iter()
            .filter(|v| v.animal_id == animal_id)
            .cloned()
            .collect()
    }

    async fn insert_visit(&self, visit: Visit) -> Result<Visit> {
        let mut data = self.data.write().await;
        if data.visits.iter().any(|v| v.id == visit.id) {
            return Err(FleetError::DuplicateVisit { id: visit.id });
        }
        data.visits.push(visit.clone());
        tracing::debug!("Stored visit {} for animal {}", visit.id, visit.animal_id);
        Ok(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn animal(id: i32, name: &str) -> Animal {
        Animal {
            id,
            name: name.to_string(),
            category: "Dog".to_string(),
            weight: 12.0,
            fur_color: "White".to_string(),
        }
    }

    fn visit(id: i32, animal_id: i32) -> Visit {
        Visit {
            id,
            animal_id,
            date_of_visit: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: "Vaccination".to_string(),
            price: 80.0,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let registry = InMemoryRegistry::new();
        registry.insert_animal(animal(1, "Rex")).await.unwrap();

        assert_eq!(registry.get_animal(1).await.unwrap().name, "Rex");
        assert!(registry.get_animal(2).await.is_none());
        assert!(matches!(
            registry.insert_animal(animal(1, "Copy")).await,
            Err(FleetError::DuplicateAnimal { id: 1 })
        ));
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let registry = InMemoryRegistry::with_records(vec![animal(1, "Rex"), animal(2, "Max")], vec![]);

        let update = AnimalUpdate {
            name: "Rexy".to_string(),
            category: "Dog".to_string(),
            weight: 13.5,
            fur_color: "Brown".to_string(),
        };
        let updated = registry.update_animal(1, update.clone()).await.unwrap();
        assert_eq!(updated.name, "Rexy");
        assert!(registry.update_animal(7, update).await.is_none());

        let removed = registry.remove_animal(2).await.unwrap();
        assert_eq!(removed.name, "Max");
        assert!(registry.remove_animal(2).await.is_none());
        assert_eq!(registry.list_animals().await.len(), 1);
    }

    #[tokio::test]
    async fn test_visits_filtered_by_animal() {
        let registry = InMemoryRegistry::new();
        registry.insert_visit(visit(1, 10)).await.unwrap();
        registry.insert_visit(visit(2, 11)).await.unwrap();
        registry.insert_visit(visit(3, 10)).await.unwrap();

        let ids: Vec<i32> = registry.visits_for(10).await.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(registry.visits_for(99).await.is_empty());
        assert!(registry.insert_visit(visit(2, 10)).await.is_err());
    }
}
