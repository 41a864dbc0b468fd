use domain::common::entity::RecordId;
use domain::common::error::DomainError;
use domain::firestation::entity::Firestation;

/// Pluggable station-to-address coverage collection.
///
/// Same snapshot and save semantics as [`crate::secondary::person_store::PersonStore`].
pub trait FirestationStore: Send + Sync {
    fn find_all(&self) -> Result<Vec<Firestation>, DomainError>;

    fn find_by_id(&self, id: RecordId) -> Result<Option<Firestation>, DomainError>;

    fn save(&self, firestation: Firestation) -> Result<Firestation, DomainError>;

    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError>;
}
