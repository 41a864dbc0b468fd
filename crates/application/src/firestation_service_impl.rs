use std::sync::Arc;

use domain::common::entity::RecordId;
use domain::common::error::DomainError;
use domain::firestation::entity::Firestation;
use ports::secondary::firestation_store::FirestationStore;

/// Application-level firestation coverage service (CRUD only; the
/// coverage query lives on [`crate::alert_service_impl::AlertAppService`]
/// with the other read queries).
pub struct FirestationAppService {
    store: Arc<dyn FirestationStore>,
}

impl FirestationAppService {
    pub fn new(store: Arc<dyn FirestationStore>) -> Self {
        Self { store }
    }

    pub fn get_all(&self) -> Result<Vec<Firestation>, DomainError> {
        let rows = self.store.find_all()?;
        tracing::debug!(count = rows.len(), "fetched all firestations");
        Ok(rows)
    }

    pub fn get_by_id(&self, id: RecordId) -> Result<Option<Firestation>, DomainError> {
        let row = self.store.find_by_id(id)?;
        tracing::debug!(%id, found = row.is_some(), "firestation lookup");
        Ok(row)
    }

    pub fn save(&self, firestation: Firestation) -> Result<Firestation, DomainError> {
        firestation.validate()?;
        let saved = self.store.save(firestation)?;
        tracing::info!(id = ?saved.id, station = saved.station, "firestation saved");
        Ok(saved)
    }

    pub fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        self.store.delete_by_id(id)?;
        tracing::info!(%id, "firestation deleted");
        Ok(())
    }
}
