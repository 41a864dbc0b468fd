//! Vec-backed store fakes for unit tests in crates that must not pull
//! in the real storage adapter.

use std::sync::Mutex;

use domain::common::entity::RecordId;
use domain::common::error::DomainError;
use domain::firestation::entity::Firestation;
use domain::medical::entity::MedicalRecord;
use domain::person::entity::Person;

use crate::secondary::firestation_store::FirestationStore;
use crate::secondary::medical_record_store::MedicalRecordStore;
use crate::secondary::person_store::PersonStore;

/// In-memory fake person store with a 1-based id sequence.
#[derive(Default)]
pub struct FakePersonStore {
    rows: Mutex<Vec<Person>>,
}

impl FakePersonStore {
    pub fn with(rows: Vec<Person>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

impl PersonStore for FakePersonStore {
    fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<Person>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == Some(id))
            .cloned())
    }

    fn save(&self, mut person: Person) -> Result<Person, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match person.id {
            Some(id) => {
                if let Some(slot) = rows.iter_mut().find(|p| p.id == Some(id)) {
                    *slot = person.clone();
                } else {
                    rows.push(person.clone());
                }
            }
            None => {
                person.id = Some(RecordId(rows.len() as u64 + 1));
                rows.push(person.clone());
            }
        }
        Ok(person)
    }

    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows
            .iter()
            .position(|p| p.id == Some(id))
            .ok_or_else(|| DomainError::NotFound(format!("person {id}")))?;
        rows.remove(pos);
        Ok(())
    }
}

/// In-memory fake firestation store.
#[derive(Default)]
pub struct FakeFirestationStore {
    rows: Mutex<Vec<Firestation>>,
}

impl FakeFirestationStore {
    pub fn with(rows: Vec<Firestation>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

impl FirestationStore for FakeFirestationStore {
    fn find_all(&self) -> Result<Vec<Firestation>, DomainError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<Firestation>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == Some(id))
            .cloned())
    }

    fn save(&self, mut firestation: Firestation) -> Result<Firestation, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match firestation.id {
            Some(id) => {
                if let Some(slot) = rows.iter_mut().find(|f| f.id == Some(id)) {
                    *slot = firestation.clone();
                } else {
                    rows.push(firestation.clone());
                }
            }
            None => {
                firestation.id = Some(RecordId(rows.len() as u64 + 1));
                rows.push(firestation.clone());
            }
        }
        Ok(firestation)
    }

    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows
            .iter()
            .position(|f| f.id == Some(id))
            .ok_or_else(|| DomainError::NotFound(format!("firestation {id}")))?;
        rows.remove(pos);
        Ok(())
    }
}

/// In-memory fake medical record store.
#[derive(Default)]
pub struct FakeMedicalRecordStore {
    rows: Mutex<Vec<MedicalRecord>>,
}

impl FakeMedicalRecordStore {
    pub fn with(rows: Vec<MedicalRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

impl MedicalRecordStore for FakeMedicalRecordStore {
    fn find_all(&self) -> Result<Vec<MedicalRecord>, DomainError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<MedicalRecord>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == Some(id))
            .cloned())
    }

    fn save(&self, mut record: MedicalRecord) -> Result<MedicalRecord, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match record.id {
            Some(id) => {
                if let Some(slot) = rows.iter_mut().find(|r| r.id == Some(id)) {
                    *slot = record.clone();
                } else {
                    rows.push(record.clone());
                }
            }
            None => {
                record.id = Some(RecordId(rows.len() as u64 + 1));
                rows.push(record.clone());
            }
        }
        Ok(record)
    }

    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows
            .iter()
            .position(|r| r.id == Some(id))
            .ok_or_else(|| DomainError::NotFound(format!("medical record {id}")))?;
        rows.remove(pos);
        Ok(())
    }
}

/// Person store whose every operation fails, for testing fatal
/// store-error propagation.
pub struct BrokenPersonStore;

impl PersonStore for BrokenPersonStore {
    fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        Err(DomainError::StoreFailure("person store down".to_string()))
    }

    fn find_by_id(&self, _id: RecordId) -> Result<Option<Person>, DomainError> {
        Err(DomainError::StoreFailure("person store down".to_string()))
    }

    fn save(&self, _person: Person) -> Result<Person, DomainError> {
        Err(DomainError::StoreFailure("person store down".to_string()))
    }

    fn delete_by_id(&self, _id: RecordId) -> Result<(), DomainError> {
        Err(DomainError::StoreFailure("person store down".to_string()))
    }
}
