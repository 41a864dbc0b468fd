use domain::common::entity::RecordId;
use domain::common::error::DomainError;
use domain::medical::entity::MedicalRecord;

/// Pluggable medical record collection.
///
/// The alert queries join medical records to persons by shared id, so
/// implementations should hand out ids from the same kind of sequence
/// the person store uses (see `MedicalRecord` docs in the domain).
pub trait MedicalRecordStore: Send + Sync {
    fn find_all(&self) -> Result<Vec<MedicalRecord>, DomainError>;

    fn find_by_id(&self, id: RecordId) -> Result<Option<MedicalRecord>, DomainError>;

    fn save(&self, record: MedicalRecord) -> Result<MedicalRecord, DomainError>;

    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError>;
}
