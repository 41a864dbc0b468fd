use domain::common::entity::RecordId;
use domain::common::error::DomainError;
use domain::person::entity::Person;

/// Pluggable person collection.
///
/// `find_all` returns a full snapshot whose order is
/// implementation-defined but stable across calls within one request.
/// Implementations must be shareable across request handlers.
pub trait PersonStore: Send + Sync {
    /// Full snapshot of every person, store order.
    fn find_all(&self) -> Result<Vec<Person>, DomainError>;

    /// Look up one person by id. Absence is `Ok(None)`, not an error.
    fn find_by_id(&self, id: RecordId) -> Result<Option<Person>, DomainError>;

    /// Insert or update. A record without an id gets one assigned;
    /// a record with an existing id replaces that record. Returns the
    /// stored record with its id populated.
    fn save(&self, person: Person) -> Result<Person, DomainError>;

    /// Delete by id. Deleting an unknown id is `NotFound`.
    fn delete_by_id(&self, id: RecordId) -> Result<(), DomainError>;
}
