use std::sync::Arc;

use domain::common::entity::RecordId;
use domain::common::error::DomainError;
use domain::medical::entity::MedicalRecord;
use ports::secondary::medical_record_store::MedicalRecordStore;

/// Application-level medical record service.
pub struct MedicalRecordAppService {
    store: Arc<dyn MedicalRecordStore>,
}

impl MedicalRecordAppService {
    pub fn new(store: Arc<dyn MedicalRecordStore>) -> Self {
        Self { store }
    }

    pub fn get_all(&self) -> Result<Vec<MedicalRecord>, DomainError> {
        let records = self.store.find_all()?;
        tracing::debug!(count = records.len(), "fetched all medical records");
        Ok(records)
    }

    pub fn get_by_id(&self, id: RecordId) -> Result<Option<MedicalRecord>, DomainError> {
        let record = self.store.find_by_id(id)?;
        tracing::debug!(%id, found = record.is_some(), "medical record lookup");
        Ok(record)
    }

    pub fn save(&self, record: MedicalRecord) -> Result<MedicalRecord, DomainError> {
        record.validate()?;
        let saved = self.store.save(record)?;
        tracing::info!(id = ?saved.id, "medical record saved");
        Ok(saved)
    }

    pub fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        self.store.delete_by_id(id)?;
        tracing::info!(%id, "medical record deleted");
        Ok(())
    }
}
