use std::sync::Arc;

use domain::common::entity::RecordId;
use domain::common::error::DomainError;
use domain::person::entity::Person;
use ports::secondary::person_store::PersonStore;

/// Application-level person service.
///
/// Thin CRUD orchestration over the person store: validation before
/// save, logging around each store call, store failures propagated
/// untouched.
pub struct PersonAppService {
    store: Arc<dyn PersonStore>,
}

impl PersonAppService {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    pub fn get_all(&self) -> Result<Vec<Person>, DomainError> {
        let persons = self.store.find_all()?;
        tracing::debug!(count = persons.len(), "fetched all persons");
        Ok(persons)
    }

    pub fn get_by_id(&self, id: RecordId) -> Result<Option<Person>, DomainError> {
        let person = self.store.find_by_id(id)?;
        tracing::debug!(%id, found = person.is_some(), "person lookup");
        Ok(person)
    }

    /// Create or update. The store assigns an id when the record has
    /// none.
    pub fn save(&self, person: Person) -> Result<Person, DomainError> {
        person.validate()?;
        let saved = self.store.save(person)?;
        tracing::info!(id = ?saved.id, "person saved");
        Ok(saved)
    }

    pub fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        self.store.delete_by_id(id)?;
        tracing::info!(%id, "person deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ports::test_utils::{BrokenPersonStore, FakePersonStore};

    fn person(first: &str) -> Person {
        Person {
            id: None,
            first_name: first.to_string(),
            last_name: "Boyd".to_string(),
            address: "1509 Culver St".to_string(),
            city: "Culver".to_string(),
            zip: "97451".to_string(),
            phone: "841-874-6512".to_string(),
            email: "jaboyd@email.com".to_string(),
        }
    }

    #[test]
    fn save_assigns_id_and_get_all_sees_it() {
        let svc = PersonAppService::new(Arc::new(FakePersonStore::default()));
        let saved = svc.save(person("John")).unwrap();
        assert_eq!(saved.id, Some(RecordId(1)));
        assert_eq!(svc.get_all().unwrap().len(), 1);
    }

    #[test]
    fn save_rejects_invalid_person() {
        let svc = PersonAppService::new(Arc::new(FakePersonStore::default()));
        let mut p = person("John");
        p.first_name = String::new();
        assert!(matches!(svc.save(p), Err(DomainError::InvalidRecord(_))));
    }

    #[test]
    fn save_with_existing_id_updates_in_place() {
        let svc = PersonAppService::new(Arc::new(FakePersonStore::default()));
        let mut saved = svc.save(person("John")).unwrap();
        saved.phone = "841-874-0000".to_string();
        svc.save(saved.clone()).unwrap();

        let fetched = svc.get_by_id(RecordId(1)).unwrap().unwrap();
        assert_eq!(fetched.phone, "841-874-0000");
        assert_eq!(svc.get_all().unwrap().len(), 1);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let svc = PersonAppService::new(Arc::new(FakePersonStore::default()));
        assert!(matches!(
            svc.delete(RecordId(99)),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn store_failure_propagates() {
        let svc = PersonAppService::new(Arc::new(BrokenPersonStore));
        assert!(matches!(
            svc.get_all(),
            Err(DomainError::StoreFailure(_))
        ));
    }
}
