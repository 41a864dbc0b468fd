//! In-memory store backing all three entity ports.
//!
//! Each store guards a plain `Vec` with a `Mutex` and hands out ids
//! from its own 1-based sequence. The sequence never reuses ids after
//! a delete, so a re-created record cannot silently adopt a stale id.
//! Lock poisoning (a panic while holding the lock) is surfaced as a
//! `StoreFailure` rather than propagated as a panic.

use std::sync::Mutex;

use domain::common::entity::RecordId;
use domain::common::error::DomainError;
use domain::firestation::entity::Firestation;
use domain::medical::entity::MedicalRecord;
use domain::person::entity::Person;
use ports::secondary::firestation_store::FirestationStore;
use ports::secondary::medical_record_store::MedicalRecordStore;
use ports::secondary::person_store::PersonStore;

/// Records that carry an optional store-assigned id.
trait Identified {
    fn id(&self) -> Option<RecordId>;
    fn set_id(&mut self, id: RecordId);
}

impl Identified for Person {
    fn id(&self) -> Option<RecordId> {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

impl Identified for Firestation {
    fn id(&self) -> Option<RecordId> {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

impl Identified for MedicalRecord {
    fn id(&self) -> Option<RecordId> {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

struct Table<T> {
    rows: Vec<T>,
    next_id: u64,
}

/// Mutex-guarded table with a monotonic id sequence.
struct MemoryTable<T> {
    inner: Mutex<Table<T>>,
    entity: &'static str,
}

impl<T: Identified + Clone> MemoryTable<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            inner: Mutex::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
            entity,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Table<T>>, DomainError> {
        self.inner
            .lock()
            .map_err(|_| DomainError::StoreFailure(format!("{} table lock poisoned", self.entity)))
    }

    fn find_all(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.lock()?.rows.clone())
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<T>, DomainError> {
        Ok(self
            .lock()?
            .rows
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned())
    }

    fn save(&self, mut record: T) -> Result<T, DomainError> {
        let mut table = self.lock()?;
        match record.id() {
            Some(id) => {
                if let Some(slot) = table.rows.iter_mut().find(|r| r.id() == Some(id)) {
                    *slot = record.clone();
                } else {
                    // Client-supplied id for a record we have never
                    // seen: keep it, and bump the sequence past it.
                    table.next_id = table.next_id.max(id.0 + 1);
                    table.rows.push(record.clone());
                }
            }
            None => {
                let id = RecordId(table.next_id);
                table.next_id += 1;
                record.set_id(id);
                table.rows.push(record.clone());
            }
        }
        Ok(record)
    }

    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError> {
        let mut table = self.lock()?;
        let pos = table
            .rows
            .iter()
            .position(|r| r.id() == Some(id))
            .ok_or_else(|| DomainError::NotFound(format!("{} {id}", self.entity)))?;
        table.rows.remove(pos);
        Ok(())
    }
}

pub struct MemoryPersonStore {
    table: MemoryTable<Person>,
}

impl Default for MemoryPersonStore {
    fn default() -> Self {
        Self {
            table: MemoryTable::new("person"),
        }
    }
}

impl PersonStore for MemoryPersonStore {
    fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        self.table.find_all()
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<Person>, DomainError> {
        self.table.find_by_id(id)
    }

    fn save(&self, person: Person) -> Result<Person, DomainError> {
        self.table.save(person)
    }

    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError> {
        self.table.delete_by_id(id)
    }
}

pub struct MemoryFirestationStore {
    table: MemoryTable<Firestation>,
}

impl Default for MemoryFirestationStore {
    fn default() -> Self {
        Self {
            table: MemoryTable::new("firestation"),
        }
    }
}

impl FirestationStore for MemoryFirestationStore {
    fn find_all(&self) -> Result<Vec<Firestation>, DomainError> {
        self.table.find_all()
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<Firestation>, DomainError> {
        self.table.find_by_id(id)
    }

    fn save(&self, firestation: Firestation) -> Result<Firestation, DomainError> {
        self.table.save(firestation)
    }

    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError> {
        self.table.delete_by_id(id)
    }
}

pub struct MemoryMedicalRecordStore {
    table: MemoryTable<MedicalRecord>,
}

impl Default for MemoryMedicalRecordStore {
    fn default() -> Self {
        Self {
            table: MemoryTable::new("medical record"),
        }
    }
}

impl MedicalRecordStore for MemoryMedicalRecordStore {
    fn find_all(&self) -> Result<Vec<MedicalRecord>, DomainError> {
        self.table.find_all()
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<MedicalRecord>, DomainError> {
        self.table.find_by_id(id)
    }

    fn save(&self, record: MedicalRecord) -> Result<MedicalRecord, DomainError> {
        self.table.save(record)
    }

    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError> {
        self.table.delete_by_id(id)
    }
}
